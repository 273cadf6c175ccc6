use crate::mcts::Node;
use crate::report::{Candidate, Info, MultiPv, Pv, Ranked, ReportError, Score, rank};
use derive_more::with_trait::Constructor;
use std::iter::Enumerate;
use std::time::Duration;

/// Reports the most promising lines found by a search.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
pub struct Reporter {
    width: MultiPv,
    time: Duration,
    playouts: u64,
}

impl Reporter {
    /// The search speed in playouts per second.
    #[inline(always)]
    pub fn nps(&self) -> u64 {
        let secs = self.time.as_secs_f64();
        if secs > 0.0 {
            (self.playouts as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Ranks the children of `root` and returns an iterator over their lines.
    ///
    /// Ranking happens up front, but each line is only resolved as the
    /// iterator is advanced, so that progress can be reported as it's made.
    pub fn report<'a>(&self, root: &'a Node) -> Result<Lines<'a>, ReportError> {
        let ranking = rank(root, self.width)?;
        if ranking.is_empty() {
            return Err(ReportError::NoVisitedMoves);
        }

        Ok(Lines {
            root,
            ranking: ranking.into_iter().enumerate(),
            nps: self.nps(),
            time: self.time,
        })
    }

    /// Resolves every line of `root`, calling `emit` as each one is resolved.
    pub fn report_with<F>(&self, root: &Node, mut emit: F) -> Result<Vec<Candidate>, ReportError>
    where
        F: FnMut(Info),
    {
        let mut candidates = Vec::new();
        for line in self.report(root)? {
            let (candidate, info) = line?;
            emit(info);
            candidates.push(candidate);
        }

        Ok(candidates)
    }
}

/// An iterator over the candidate lines of a search tree, best first.
#[derive(Debug)]
pub struct Lines<'a> {
    root: &'a Node,
    ranking: Enumerate<arrayvec::IntoIter<Ranked, { MultiPv::MAX as usize }>>,
    nps: u64,
    time: Duration,
}

impl Lines<'_> {
    fn resolve(&self, rank: usize, ranked: Ranked) -> Result<(Candidate, Info), ReportError> {
        let pv = Pv::extract(self.root, ranked.index())?;
        let score = Score::from_win_rate(ranked.win_rate());
        let nodes = self.root.move_count;
        let info = Info::new(rank, self.nps, self.time, nodes, score, pv.clone());
        let candidate = Candidate::new(rank, ranked.mv(), ranked.win_rate(), score, pv);
        Ok((candidate, info))
    }
}

impl Iterator for Lines<'_> {
    type Item = Result<(Candidate, Info), ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (i, ranked) = self.ranking.next()?;
        Some(self.resolve(i + 1, ranked))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranking.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcts::WinRate;
    use crate::shogi::Move;
    use proptest::{collection::vec, prelude::*};
    use test_strategy::proptest;

    fn root(moves: &[Move], counts: &[u32]) -> Node {
        let mut node = Node::expanded(moves.iter().copied());
        for (idx, &n) in counts.iter().enumerate() {
            node = node.with_visits(idx, n, n as f32 * 0.75);
        }

        node.with_move_count(counts.iter().sum())
    }

    #[proptest]
    fn reports_visited_lines_by_rank(
        #[strategy(vec(any::<Move>(), 4))] moves: Vec<Move>,
        #[strategy(1u64..10)] secs: u64,
        playouts: u32,
    ) {
        let time = Duration::from_secs(secs);
        let reporter = Reporter::new(MultiPv::default(), time, playouts.into());

        let mut infos = Vec::new();
        let root = root(&moves, &[10, 5, 5, 0]);
        let candidates = reporter.report_with(&root, |i| infos.push(i)).expect("is ok");

        assert_eq!(candidates.len(), 3);
        assert_eq!(infos.len(), 3);

        for (i, (c, info)) in candidates.iter().zip(&infos).enumerate() {
            assert_eq!(c.rank(), i + 1);
            assert_eq!(info.multipv(), i + 1);
            assert_eq!(info.nodes(), 20);
            assert_eq!(info.time(), time);
            assert_eq!(info.nps(), u64::from(playouts) / secs);
            assert_eq!(info.score(), c.score());
            assert_eq!(info.pv(), c.pv());
            assert_eq!(c.win_rate(), WinRate::new(0.75));
            assert_eq!(c.score(), Score::new(659));
        }

        assert_eq!(candidates[0].mv(), moves[0]);
        assert_eq!(candidates[1].mv(), moves[1]);
        assert_eq!(candidates[2].mv(), moves[2]);
    }

    #[proptest]
    fn candidate_pv_starts_with_its_move(
        #[strategy(vec(any::<Move>(), 1..10))] moves: Vec<Move>,
        #[strategy(vec(1u32..10, #moves.len()))] counts: Vec<u32>,
        width: MultiPv,
    ) {
        let reporter = Reporter::new(width, Duration::ZERO, 0);
        for c in reporter.report_with(&root(&moves, &counts), drop).expect("is ok") {
            assert_eq!(c.pv().head(), Some(c.mv()));
            assert_eq!(c.ponder(), None);
        }
    }

    #[proptest]
    fn ponder_move_comes_from_the_subtree(m: Move, r: Move, s: Move) {
        let child = Node::expanded([r, s]).with_move_count(3).with_visits(1, 2, 1.0);
        let root = root(&[m], &[3]).with_child(0, child);

        let reporter = Reporter::new(MultiPv::default(), Duration::ZERO, 0);
        let candidates = reporter.report_with(&root, drop).expect("is ok");
        assert_eq!(candidates[0].ponder(), Some(s));
    }

    #[proptest]
    fn speed_is_zero_if_no_time_elapsed(playouts: u64) {
        assert_eq!(Reporter::new(MultiPv::default(), Duration::ZERO, playouts).nps(), 0);
    }

    #[proptest]
    fn root_without_visited_moves_fails(#[strategy(vec(any::<Move>(), 0..10))] moves: Vec<Move>) {
        let reporter = Reporter::new(MultiPv::default(), Duration::ZERO, 0);
        assert!(matches!(
            reporter.report(&Node::expanded(moves)),
            Err(ReportError::NoVisitedMoves)
        ));
    }

    #[test]
    fn unexpanded_root_fails() {
        let reporter = Reporter::new(MultiPv::default(), Duration::ZERO, 0);
        assert!(matches!(
            reporter.report(&Node::new()),
            Err(ReportError::UnexpandedRoot)
        ));
    }

    #[proptest]
    fn lines_are_resolved_lazily(m: Move, n: Move, r: Move) {
        let mut broken = Node::expanded([r]).with_move_count(1);
        broken.child_move_count.clear();

        let root = root(&[m, n], &[2, 1]).with_child(1, broken);
        let reporter = Reporter::new(MultiPv::default(), Duration::ZERO, 0);
        let mut lines = reporter.report(&root).expect("is ok");

        assert!(matches!(lines.next(), Some(Ok((c, _))) if c.mv() == m));
        assert!(matches!(lines.next(), Some(Err(ReportError::MalformedTree))));
        assert!(lines.next().is_none());

        let mut emitted = 0;
        let result = reporter.report_with(&root, |_| emitted += 1);
        assert_eq!(result, Err(ReportError::MalformedTree));
        assert_eq!(emitted, 1);
    }
}
