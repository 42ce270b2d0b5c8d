// File: crates/chat/src/presets.rs
// Summary: Built-in example prompts offered by the CLI.

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Sales,
    Survey,
    Website,
    Fitness,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Sales, Preset::Survey, Preset::Website, Preset::Fitness];

    pub fn prompt(&self) -> &'static str {
        match self {
            Preset::Sales => {
                "Show me a chart of monthly sales data: Jan: $45K, Feb: $52K, Mar: $38K, Apr: $61K, May: $55K, Jun: $72K"
            }
            Preset::Survey => {
                "Visualize survey results: Excellent: 55%, Good: 33%, Average: 12%, Poor: 5%, Very Poor: 2%"
            }
            Preset::Website => {
                "Website traffic over 6 months: Jan: 12.5K visitors, Feb: 14.2K, Mar: 16.8K, Apr: 13.1K, May: 18.9K, Jun: 21.3K"
            }
            Preset::Fitness => {
                "My daily step count last week: Mon: 8,500, Tue: 12,300, Wed: 6,800, Thu: 11,200, Fri: 9,600, Sat: 15,400, Sun: 7,900"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract_core::{ChartKind, ChartSpec};

    #[test]
    fn every_preset_extracts() {
        for p in Preset::ALL {
            let spec = ChartSpec::from_text(p.prompt()).expect("preset should chart");
            assert_eq!(spec.labels().len(), spec.values().len());
        }
    }

    #[test]
    fn preset_kinds() {
        let kind = |p: Preset| ChartSpec::from_text(p.prompt()).map(|s| s.kind());
        assert_eq!(kind(Preset::Sales), Ok(ChartKind::Line));
        assert_eq!(kind(Preset::Survey), Ok(ChartKind::Doughnut));
        assert_eq!(kind(Preset::Website), Ok(ChartKind::Line));
        assert_eq!(kind(Preset::Fitness), Ok(ChartKind::Line));
    }
}
