use crate::color::{ColorError, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixerPhase {
    Empty,
    NonEmpty,
}

/// Ordered list of picked colors for one mixing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mixer {
    selections: Vec<Rgb>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `#rrggbb` code and append it. Malformed codes leave the mixer unchanged.
    pub fn add(&mut self, hex_code: &str) -> Result<Rgb, ColorError> {
        let rgb = Rgb::parse(hex_code)?;
        self.push(rgb);
        Ok(rgb)
    }

    /// Append an already parsed color
    pub fn push(&mut self, rgb: Rgb) {
        self.selections.push(rgb);
    }

    /// Remove the most recently added color. Does nothing when empty.
    pub fn step_back(&mut self) -> Option<Rgb> {
        self.selections.pop()
    }

    pub fn reset(&mut self) {
        self.selections.clear();
    }

    /// Per-channel floor average over every selection, white when empty.
    ///
    /// Always recomputed from the full list, never kept as a running value.
    pub fn mix(&self) -> Rgb {
        if self.selections.is_empty() {
            return Rgb::WHITE;
        }

        let mut totals = [0u64; 3];
        for rgb in &self.selections {
            for (total, channel) in totals.iter_mut().zip(rgb.channels()) {
                *total += u64::from(channel);
            }
        }

        let n = self.selections.len() as u64;
        // A mean of u8 values always fits in u8.
        let [r, g, b] = totals.map(|total| (total / n) as u8);
        Rgb::new(r, g, b)
    }

    pub fn selections(&self) -> &[Rgb] {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn phase(&self) -> MixerPhase {
        if self.selections.is_empty() {
            MixerPhase::Empty
        } else {
            MixerPhase::NonEmpty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed(codes: &[&str]) -> String {
        let mut mixer = Mixer::new();
        for code in codes {
            mixer.add(code).unwrap();
        }
        mixer.mix().to_string()
    }

    fn is_canonical(code: &str) -> bool {
        code.len() == 7
            && code.starts_with('#')
            && code[1..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    #[test]
    fn test_empty_mix_is_white() {
        let mixer = Mixer::new();
        assert_eq!(mixer.phase(), MixerPhase::Empty);
        assert_eq!(mixer.mix().to_string(), "#ffffff");
    }

    #[test]
    fn test_mix_two() {
        assert_eq!(mixed(&["#ff0000", "#0000ff"]), "#7f007f");
        assert_eq!(mixed(&["#ff0000", "#000000"]), "#7f0000");
    }

    #[test]
    fn test_mix_three_floors() {
        assert_eq!(mixed(&["#ff0000", "#ff0000", "#000000"]), "#aa0000");
    }

    #[test]
    fn test_mix_single_and_mixed_case_input() {
        assert_eq!(mixed(&["#FF7D00"]), "#ff7d00");
        assert_eq!(mixed(&["#007DFF", "#7d00ff"]), "#3e3eff");
    }

    #[test]
    fn test_mix_is_order_independent() {
        assert_eq!(
            mixed(&["#ff7d00", "#00ff00", "#7d00ff"]),
            mixed(&["#7d00ff", "#ff7d00", "#00ff00"])
        );
    }

    #[test]
    fn test_mix_output_is_canonical() {
        let palette = ["#ff0000", "#ff7d00", "#ffff00", "#00ff00", "#007dff", "#0000ff", "#7d00ff", "#010203"];
        let mut mixer = Mixer::new();
        for (i, code) in palette.iter().cycle().take(40).enumerate() {
            mixer.add(code).unwrap();
            if i % 3 == 0 {
                mixer.add("#FFFFFF").unwrap();
            }
            let out = mixer.mix().to_string();
            assert!(is_canonical(&out), "{out}");
        }
    }

    #[test]
    fn test_add_then_step_back_restores() {
        let mut mixer = Mixer::new();
        mixer.add("#ff0000").unwrap();
        mixer.add("#00ff00").unwrap();
        let before = mixer.clone();

        mixer.add("#0000ff").unwrap();
        assert_eq!(mixer.len(), 3);
        assert_eq!(mixer.step_back(), Some(Rgb::new(0, 0, 0xff)));
        assert_eq!(mixer, before);
    }

    #[test]
    fn test_step_back_on_empty_is_noop() {
        let mut mixer = Mixer::new();
        let before = mixer.mix();
        assert_eq!(mixer.step_back(), None);
        assert_eq!(mixer.step_back(), None);
        assert!(mixer.is_empty());
        assert_eq!(mixer.mix(), before);
    }

    #[test]
    fn test_step_back_to_empty() {
        let mut mixer = Mixer::new();
        mixer.add("#ff0000").unwrap();
        assert_eq!(mixer.phase(), MixerPhase::NonEmpty);
        mixer.step_back();
        assert_eq!(mixer.phase(), MixerPhase::Empty);
        assert_eq!(mixer.mix(), Rgb::WHITE);
    }

    #[test]
    fn test_reset() {
        let mut mixer = Mixer::new();
        mixer.reset();
        assert_eq!(mixer.phase(), MixerPhase::Empty);

        mixer.add("#ff0000").unwrap();
        mixer.add("#ff0000").unwrap();
        mixer.reset();
        assert_eq!(mixer.phase(), MixerPhase::Empty);
        assert!(mixer.selections().is_empty());
        assert_eq!(mixer.mix().to_string(), "#ffffff");
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let mut mixer = Mixer::new();
        mixer.add("#ff0000").unwrap();
        mixer.add("#0000ff").unwrap();
        mixer.add("#ff0000").unwrap();
        assert_eq!(
            mixer.selections(),
            &[Rgb::new(0xff, 0, 0), Rgb::new(0, 0, 0xff), Rgb::new(0xff, 0, 0)]
        );
    }

    #[test]
    fn test_add_rejects_malformed() {
        let mut mixer = Mixer::new();
        mixer.add("#ff0000").unwrap();

        let err = mixer.add("red").unwrap_err();
        assert_eq!(err, ColorError::InvalidColor("red".to_string()));
        assert!(mixer.add("#12345").is_err());
        assert_eq!(mixer.len(), 1);
        assert_eq!(mixer.mix().to_string(), "#ff0000");
    }
}
