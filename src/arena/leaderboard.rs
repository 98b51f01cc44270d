//! Significance tiers over tournament standings.
use crate::*;
use anyhow::Context;

/// Entrants closer than this, in combined standard errors, share a tier.
pub const CLUSTER_MAX_SIGMA: f64 = 0.7;

/// Separation between two entrants' means in units of their combined
/// standard error.
pub fn significance(a: &Standing, b: &Standing) -> f64 {
    let gap = (a.mean() - b.mean()).abs();
    let spread = (a.stderr().powi(2) + b.stderr().powi(2)).sqrt();
    match (gap == 0.0, spread == 0.0) {
        (true, _) => 0.0,
        (false, true) => f64::INFINITY,
        (false, false) => gap / spread,
    }
}

/// Entrants whose scores can't be told apart, sorted by ascending mean.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    low: f64,
    high: f64,
    members: Vec<Standing>,
}

impl From<Standing> for Group {
    fn from(standing: Standing) -> Self {
        Self {
            low: standing.mean(),
            high: standing.mean(),
            members: vec![standing],
        }
    }
}

impl Group {
    pub fn low(&self) -> f64 {
        self.low
    }
    pub fn high(&self) -> f64 {
        self.high
    }
    pub fn members(&self) -> &[Standing] {
        &self.members
    }
    /// Worst-case separation between `standing` and any member.
    fn distance(&self, standing: &Standing) -> f64 {
        self.members
            .iter()
            .map(|member| significance(standing, member))
            .reduce(f64::max)
            .unwrap_or(f64::INFINITY)
    }
    fn admit(&mut self, standing: Standing) {
        let mean = standing.mean();
        let i = self.members.partition_point(|m| m.mean() <= mean);
        self.members.insert(i, standing);
    }
}

/// Standings clustered into tiers of statistically indistinguishable
/// entrants.
///
/// Entrants are placed in ascending order of mean. One that falls inside
/// a tier's score interval joins it. Otherwise it joins the nearer
/// neighbouring tier if that tier is within [`CLUSTER_MAX_SIGMA`] of
/// everyone in it, or opens a tier of its own, which may then pull
/// over the edge members of its neighbours when they sit closer to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    /// Ascending by score interval.
    groups: Vec<Group>,
}

impl From<Vec<Standing>> for Leaderboard {
    fn from(mut standings: Vec<Standing>) -> Self {
        standings.sort_by(|a, b| a.mean().total_cmp(&b.mean()));
        let mut board = Self::default();
        for standing in standings {
            board.place(standing);
        }
        board
    }
}

impl Leaderboard {
    fn place(&mut self, standing: Standing) {
        let mean = standing.mean();
        let index = self.groups.partition_point(|g| g.low < mean);
        let below = index.checked_sub(1);
        let above = (index < self.groups.len()).then_some(index);
        if let Some(b) = below.filter(|b| mean <= self.groups[*b].high) {
            return self.groups[b].admit(standing);
        }
        if let Some(a) = above.filter(|a| mean >= self.groups[*a].low) {
            return self.groups[a].admit(standing);
        }
        let lower = below.map_or(f64::INFINITY, |b| self.groups[b].distance(&standing));
        let upper = above.map_or(f64::INFINITY, |a| self.groups[a].distance(&standing));
        match (below, above) {
            (Some(b), _) if lower <= CLUSTER_MAX_SIGMA && lower <= upper => {
                self.groups[b].admit(standing);
                self.groups[b].high = mean;
            }
            (_, Some(a)) if upper <= CLUSTER_MAX_SIGMA => {
                self.groups[a].admit(standing);
                self.groups[a].low = mean;
            }
            _ => {
                self.groups.insert(index, Group::from(standing));
                self.rebalance(index);
            }
        }
    }

    /// Lets a freshly opened group at `index` pull over the top member of
    /// the group below and the bottom member of the group above while
    /// they fit it better than their own.
    fn rebalance(&mut self, index: usize) {
        loop {
            let mut moved = false;
            if let Some(b) = index.checked_sub(1) {
                if let Some(top) = self.groups[b].members.last().cloned() {
                    if self.groups[index].distance(&top) < self.groups[b].distance(&top) {
                        self.groups[b].members.pop();
                        if let Some(next) = self.groups[b].members.last() {
                            self.groups[b].high = next.mean();
                        }
                        self.groups[index].low = self.groups[index].low.min(top.mean());
                        self.groups[index].admit(top);
                        moved = true;
                    }
                }
            }
            if let Some(a) = Some(index + 1).filter(|a| *a < self.groups.len()) {
                if let Some(bottom) = self.groups[a].members.first().cloned() {
                    if self.groups[index].distance(&bottom) < self.groups[a].distance(&bottom) {
                        self.groups[a].members.remove(0);
                        if let Some(next) = self.groups[a].members.first() {
                            self.groups[a].low = next.mean();
                        }
                        self.groups[index].high = self.groups[index].high.max(bottom.mean());
                        self.groups[index].admit(bottom);
                        moved = true;
                    }
                }
            }
            if !moved {
                break;
            }
        }
    }

    /// Groups from worst to best.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Tiers from best to worst, with the places each one spans.
    pub fn tiers(&self) -> Vec<Tier> {
        let mut place = 0;
        self.groups
            .iter()
            .rev()
            .map(|group| {
                let tier = Tier {
                    from_place: place + 1,
                    to_place: place + group.members.len(),
                    from_score: group.high,
                    to_score: group.low,
                    players: group
                        .members
                        .iter()
                        .rev()
                        .map(|member| Entry {
                            name: member.name.clone(),
                            mean: member.mean(),
                            stderr: member.stderr(),
                        })
                        .collect(),
                };
                place = tier.to_place;
                tier
            })
            .collect()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(&self.tiers()).context("serialize leaderboard")
    }

    /// Writes the tiers as JSON.
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("write leaderboard to {}", path.display()))?;
        log::info!("[arena] leaderboard written to {}", path.display());
        Ok(())
    }
}

/// One entrant as reported on the leaderboard.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub name: String,
    pub mean: f64,
    pub stderr: f64,
}

/// One reported tier: a single place or a shared range of places.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tier {
    pub from_place: usize,
    pub to_place: usize,
    pub from_score: f64,
    pub to_score: f64,
    /// Best first.
    pub players: Vec<Entry>,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.from_place == self.to_place {
            true => writeln!(f, "Place {}:", self.from_place)?,
            false => writeln!(f, "Group {}-{}:", self.from_place, self.to_place)?,
        }
        writeln!(f, "  Interval: [{:+.1}] - [{:+.1}]", self.to_score, self.from_score)?;
        let mut players = self
            .players
            .iter()
            .map(|p| format!("{} ({:+.1}±{:.1})", p.name, p.mean, p.stderr))
            .collect::<Vec<_>>();
        players.sort();
        write!(f, "  Players: {}", players.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(name: &str, scores: &[Payoff]) -> Standing {
        Standing {
            name: name.to_string(),
            scores: scores.to_vec(),
        }
    }

    #[test]
    fn distant_entrants_get_their_own_places() {
        let board = Leaderboard::from(vec![
            standing("b", &[9, 11]),
            standing("a", &[-1, 1]),
            standing("c", &[19, 21]),
        ]);
        let tiers = board.tiers();
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].players[0].name, "c");
        assert_eq!(tiers[2].players[0].name, "a");
        for (i, tier) in tiers.iter().enumerate() {
            assert_eq!(tier.from_place, i + 1);
            assert_eq!(tier.to_place, i + 1);
        }
        assert!(tiers[0].to_string().starts_with("Place 1:"));
    }

    #[test]
    fn close_entrants_share_a_group() {
        // a and b differ by far less than their standard errors of 10
        let board = Leaderboard::from(vec![
            standing("a", &[-10, 10]),
            standing("b", &[-9, 11]),
            standing("c", &[90, 110]),
        ]);
        let tiers = board.tiers();
        assert_eq!(tiers.len(), 2);
        assert_eq!((tiers[0].from_place, tiers[0].to_place), (1, 1));
        assert_eq!((tiers[1].from_place, tiers[1].to_place), (2, 3));
        assert_eq!(tiers[1].from_score, 1.0);
        assert_eq!(tiers[1].to_score, 0.0);
        let names = tiers[1].players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a"]);
        assert!(tiers[1].to_string().starts_with("Group 2-3:"));
    }

    #[test]
    fn new_tier_pulls_over_a_closer_neighbour() {
        // b is admitted next to a, then c opens a tier that b sits closer to
        let board = Leaderboard::from(vec![
            standing("a", &[-10, 10]),
            standing("b", &[-1, 19]),
            standing("c", &[4, 24]),
        ]);
        let groups = board.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].members().len(), 1);
        assert_eq!(groups[0].high(), 0.0);
        assert_eq!(groups[1].members().len(), 2);
        assert_eq!(groups[1].low(), 9.0);
        assert_eq!(groups[1].high(), 14.0);
    }

    #[test]
    fn json_layout() {
        let board = Leaderboard::from(vec![standing("a", &[-1, 1]), standing("b", &[9, 11])]);
        let json = serde_json::from_str::<serde_json::Value>(&board.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["from_place"], 1);
        assert_eq!(json[0]["players"][0]["name"], "b");
        assert_eq!(json[1]["to_score"], 0.0);
        let tiers = serde_json::from_value::<Vec<Tier>>(json).unwrap();
        assert_eq!(tiers, board.tiers());
    }

    #[test]
    fn significance_is_scaled_by_stderr() {
        let a = standing("a", &[-10, 10]);
        let b = standing("b", &[0, 20]);
        assert!((significance(&a, &b) - 10.0 / 200f64.sqrt()).abs() < 1e-12);
        assert_eq!(significance(&a, &a), 0.0);
        assert_eq!(significance(&standing("x", &[1]), &standing("y", &[2])), f64::INFINITY);
    }
}
