//! Wall-clock timing of a pyramid build, printed by `--timings`

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
    /// Tiles encoded during the step; `None` for steps that write no tiles
    pub tiles: Option<u64>,
}

impl StepTiming {
    pub fn tiles_per_second(&self) -> Option<f64> {
        let secs = self.duration.as_secs_f64();
        self.tiles
            .filter(|_| secs > 0.0)
            .map(|tiles| tiles as f64 / secs)
    }
}

#[derive(Debug, Default)]
pub struct BuildTimings {
    steps: Vec<StepTiming>,
}

impl BuildTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, timer: Timer) {
        let (name, duration) = timer.stop();
        self.steps.push(StepTiming { name, duration, tiles: None });
    }

    /// Record a finished level together with the number of tiles it wrote.
    pub fn record_level(&mut self, timer: Timer, tiles: u64) {
        let (name, duration) = timer.stop();
        self.steps.push(StepTiming { name, duration, tiles: Some(tiles) });
    }

    /// Append the steps of a nested build after this one's.
    pub fn extend(&mut self, other: BuildTimings) {
        self.steps.extend(other.steps);
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn total_tiles(&self) -> u64 {
        self.steps.iter().filter_map(|s| s.tiles).sum()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn print_summary(&self) {
        let total = self.total_duration();
        println!("\nPyramid Timing Summary:");
        println!("{:-<72}", "");
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            let throughput = match (step.tiles, step.tiles_per_second()) {
                (Some(tiles), Some(rate)) => format!("{tiles:>6} tiles {rate:>9.1}/s"),
                (Some(tiles), None) => format!("{tiles:>6} tiles"),
                (None, _) => String::new(),
            };
            println!(
                "{:<20} {:>12.3}ms ({:>5.1}%) {}",
                step.name,
                step.duration.as_secs_f64() * 1000.0,
                percentage,
                throughput
            );
        }
        println!("{:-<72}", "");
        println!(
            "{:<20} {:>12.3}ms          {:>6} tiles",
            "Total",
            total.as_secs_f64() * 1000.0,
            self.total_tiles()
        );
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str, millis: u64, tiles: Option<u64>) -> StepTiming {
        StepTiming {
            name: name.to_string(),
            duration: Duration::from_millis(millis),
            tiles,
        }
    }

    #[test]
    fn test_level_steps_carry_tile_counts() {
        let mut timings = BuildTimings::new();
        timings.record(Timer::start("decode_source"));
        timings.record_level(Timer::start("level_3"), 12);
        timings.record_level(Timer::start("level_2"), 4);

        let tiles: Vec<Option<u64>> = timings.steps().iter().map(|s| s.tiles).collect();
        assert_eq!(tiles, vec![None, Some(12), Some(4)]);
        assert_eq!(timings.total_tiles(), 16);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut outer = BuildTimings::new();
        outer.record(Timer::start("read_input_file"));
        let mut inner = BuildTimings::new();
        inner.record_level(Timer::start("level_0"), 1);
        inner.record(Timer::start("write_descriptor"));

        outer.extend(inner);

        let names: Vec<&str> = outer.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["read_input_file", "level_0", "write_descriptor"]);
    }

    #[test]
    fn test_tiles_per_second() {
        assert_eq!(step("level_1", 500, Some(10)).tiles_per_second(), Some(20.0));
        assert_eq!(step("level_1", 0, Some(10)).tiles_per_second(), None);
        assert_eq!(step("decode_source", 500, None).tiles_per_second(), None);
    }
}
