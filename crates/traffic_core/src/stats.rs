//! Derived traffic statistics: proximity classification and the displayed
//! count / duration / proximity triple.

use bevy_ecs::prelude::Resource;

/// Proximity bucket, determined purely by vertical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    Close,
    Medium,
    Far,
}

impl Proximity {
    pub fn label(self) -> &'static str {
        match self {
            Proximity::Close => "Close",
            Proximity::Medium => "Medium",
            Proximity::Far => "Far",
        }
    }
}

/// Classifies a vehicle by its y position: the lower it sits on the canvas,
/// the closer it is to the observer.
pub fn classify_proximity(y: f64, canvas_height: f64) -> Proximity {
    if y > canvas_height * 0.7 {
        Proximity::Close
    } else if y > canvas_height * 0.3 {
        Proximity::Medium
    } else {
        Proximity::Far
    }
}

/// Per-bucket tallies for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProximityCounts {
    pub close: usize,
    pub medium: usize,
    pub far: usize,
}

impl ProximityCounts {
    pub fn add(&mut self, proximity: Proximity) {
        match proximity {
            Proximity::Close => self.close += 1,
            Proximity::Medium => self.medium += 1,
            Proximity::Far => self.far += 1,
        }
    }

    /// The displayed "most frequent proximity". Ties resolve to the earlier
    /// bucket in (Close, Medium, Far) order; a strictly greater count is
    /// required to displace an earlier winner.
    pub fn most_frequent(&self, vehicle_count: usize) -> ProximitySummary {
        let buckets = [
            (Proximity::Close, self.close),
            (Proximity::Medium, self.medium),
            (Proximity::Far, self.far),
        ];
        let mut winner = None;
        let mut max_count = 0;
        for (proximity, count) in buckets {
            if count > max_count {
                max_count = count;
                winner = Some(proximity);
            }
        }
        match winner {
            Some(proximity) => ProximitySummary::Bucket(proximity),
            // Every live vehicle classifies into some bucket, so the Varying
            // arm cannot be reached from the classifier; it is kept to match
            // the displayed-fallback contract.
            None if vehicle_count > 0 => ProximitySummary::Varying,
            None => ProximitySummary::None,
        }
    }
}

/// Displayed proximity summary, including the no-vehicle fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProximitySummary {
    #[default]
    None,
    Varying,
    Bucket(Proximity),
}

impl ProximitySummary {
    pub fn label(self) -> &'static str {
        match self {
            ProximitySummary::None => "N/A",
            ProximitySummary::Varying => "Varying",
            ProximitySummary::Bucket(proximity) => proximity.label(),
        }
    }
}

/// The displayed statistics triple, rewritten by whichever path (simulation
/// tick or camera sampler) is active.
#[derive(Debug, Clone, Copy, Default, Resource)]
pub struct TrafficStats {
    pub vehicle_count: usize,
    pub longest_duration_secs: u64,
    pub proximity: ProximitySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS_HEIGHT: f64 = 360.0;

    #[test]
    fn proximity_thresholds_split_the_canvas() {
        assert_eq!(classify_proximity(0.0, CANVAS_HEIGHT), Proximity::Far);
        assert_eq!(classify_proximity(108.0, CANVAS_HEIGHT), Proximity::Far);
        assert_eq!(classify_proximity(108.1, CANVAS_HEIGHT), Proximity::Medium);
        assert_eq!(classify_proximity(252.0, CANVAS_HEIGHT), Proximity::Medium);
        assert_eq!(classify_proximity(252.1, CANVAS_HEIGHT), Proximity::Close);
        assert_eq!(classify_proximity(500.0, CANVAS_HEIGHT), Proximity::Close);
    }

    #[test]
    fn vehicles_above_the_canvas_count_as_far() {
        assert_eq!(classify_proximity(-80.0, CANVAS_HEIGHT), Proximity::Far);
    }

    #[test]
    fn empty_scene_summarizes_as_none() {
        let counts = ProximityCounts::default();
        assert_eq!(counts.most_frequent(0), ProximitySummary::None);
        assert_eq!(counts.most_frequent(0).label(), "N/A");
    }

    #[test]
    fn tie_resolves_to_the_earlier_bucket() {
        let mut counts = ProximityCounts::default();
        counts.add(Proximity::Medium);
        counts.add(Proximity::Far);
        assert_eq!(
            counts.most_frequent(2),
            ProximitySummary::Bucket(Proximity::Medium)
        );

        let mut counts = ProximityCounts::default();
        counts.add(Proximity::Close);
        counts.add(Proximity::Far);
        assert_eq!(
            counts.most_frequent(2),
            ProximitySummary::Bucket(Proximity::Close)
        );
    }

    #[test]
    fn strictly_greater_count_wins() {
        let mut counts = ProximityCounts::default();
        counts.add(Proximity::Close);
        counts.add(Proximity::Far);
        counts.add(Proximity::Far);
        assert_eq!(
            counts.most_frequent(3),
            ProximitySummary::Bucket(Proximity::Far)
        );
    }

    #[test]
    fn varying_fallback_is_reported_when_counts_are_empty_but_vehicles_exist() {
        // Unreachable through classify_proximity; exercised directly to pin
        // the displayed fallback.
        let counts = ProximityCounts::default();
        assert_eq!(counts.most_frequent(2), ProximitySummary::Varying);
        assert_eq!(counts.most_frequent(2).label(), "Varying");
    }
}
