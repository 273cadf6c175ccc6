mod inbound;
mod option;
mod outbound;

pub use inbound::*;
pub use option::*;
pub use outbound::*;

use crate::turn::{Controller, Decision, Engine, TurnError};
use futures::{prelude::*, stream::FusedStream};
use log::{debug, error, info, warn};

/// A basic USI server.
#[derive(Debug)]
pub struct Usi<I, O, E> {
    input: I,
    output: O,
    engine: E,
    controller: Controller,
}

impl<I, O, E> Usi<I, O, E> {
    /// Constructs a new usi server instance.
    pub fn new(input: I, output: O, engine: E) -> Self {
        Self {
            input,
            output,
            engine,
            controller: Controller::default(),
        }
    }

    /// The engine being served.
    #[inline(always)]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The turn controller.
    #[inline(always)]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}

impl<I, O, E> Usi<I, O, E>
where
    I: FusedStream<Item = Inbound> + Unpin,
    O: Sink<Outbound> + Unpin,
    E: Engine,
{
    /// Runs the USI server.
    pub async fn run(&mut self) -> Result<(), O::Error> {
        'quit: while let Some(inbound) = self.input.next().await {
            match inbound {
                Inbound::Position { sfen, moves } => {
                    if let Err(e) = self.engine.set_position(sfen.as_deref(), &moves) {
                        warn!("ignored position, {e}");
                    }
                }

                Inbound::UsiNewGame => self.engine.new_game(),

                Inbound::Go(limits) => {
                    let turn = self.controller.think(&mut self.engine, &limits, &mut self.output);
                    let decision = match turn.await {
                        Ok(decision) => decision,
                        Err(TurnError::Output(e)) => return Err(e),
                        Err(e) => {
                            error!("resigning, {e}");
                            Decision::Resign
                        }
                    };

                    if limits.is_open_ended() {
                        loop {
                            match self.input.next().await {
                                None | Some(Inbound::Stop | Inbound::PonderHit) => break,
                                Some(Inbound::Quit) => break 'quit,
                                _ => warn!("ignored unexpected command"),
                            }
                        }
                    }

                    self.output.send(Outbound::BestMove(decision)).await?;
                }

                Inbound::SetOption { name, value } => {
                    let value = value.as_deref();
                    if let Err(e) = self.controller.set_option(&mut self.engine, &name, value) {
                        warn!("ignored option, {e}");
                    }
                }

                Inbound::GameOver(result) => info!("game over, {result}"),

                Inbound::IsReady => {
                    if let Err(e) = self.engine.is_ready() {
                        error!("engine is not ready, {e}");
                    }

                    self.output.send(Outbound::ReadyOk).await?
                }

                Inbound::Usi => {
                    let mut options = self.engine.options();
                    options.extend(self.controller.options());
                    self.output.send(Outbound::UsiOk(options)).await?
                }

                Inbound::Quit => break 'quit,
                Inbound::Stop | Inbound::PonderHit => debug!("nothing to stop"),
            }
        }

        Ok(())
    }
}
