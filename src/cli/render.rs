// src/cli/render.rs
use console::Style;

use crate::models::StrengthTier;

const INDICATOR_CELLS: usize = 4;

// Strength meter: four cells filled left to right, colored per tier the
// same way the indicator bar colors them.
pub fn render_strength(tier: StrengthTier) -> String {
    let style = tier_style(tier);
    let filled = tier.criteria_met() as usize;

    let mut bar = String::new();
    for cell in 0..INDICATOR_CELLS {
        if cell < filled {
            bar.push_str(&style.apply_to("▰").to_string());
        } else {
            bar.push('▱');
        }
    }

    if tier == StrengthTier::None {
        bar
    } else {
        format!("{} {}", bar, style.apply_to(tier.label()))
    }
}

fn tier_style(tier: StrengthTier) -> Style {
    match tier {
        StrengthTier::None => Style::new(),
        StrengthTier::Weak => Style::new().red(),
        StrengthTier::Medium => Style::new().yellow(),
        StrengthTier::Good => Style::new().cyan(),
        StrengthTier::Great => Style::new().green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_fills_one_cell_per_criterion() {
        let rendered = console::strip_ansi_codes(&render_strength(StrengthTier::Medium)).to_string();
        assert_eq!(rendered, "▰▰▱▱ Medium");
    }

    #[test]
    fn full_meter_for_great() {
        let rendered = console::strip_ansi_codes(&render_strength(StrengthTier::Great)).to_string();
        assert_eq!(rendered, "▰▰▰▰ Great");
    }

    #[test]
    fn empty_meter_has_no_label() {
        let rendered = console::strip_ansi_codes(&render_strength(StrengthTier::None)).to_string();
        assert_eq!(rendered, "▱▱▱▱");
    }
}
