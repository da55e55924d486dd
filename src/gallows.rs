use crate::words::Mode;

/// Frames per art set; the last frame is the loss state.
pub const STAGES: usize = 7;

type ArtSet = [&'static str; STAGES];

// index 0 = bare gallows, one body part added per miss
static BASIC: ArtSet = [
    r" +---+
 |   |
     |
     |
     |
     |
=======",
    r" +---+
 |   |
 O   |
     |
     |
     |
=======",
    r" +---+
 |   |
 O   |
 |   |
     |
     |
=======",
    r" +---+
 |   |
 O   |
/|   |
     |
     |
=======",
    r" +---+
 |   |
 O   |
/|\  |
     |
     |
=======",
    r" +---+
 |   |
 O   |
/|\  |
/    |
     |
=======",
    r" +---+
 |   |
 O   |
/|\  |
/ \  |
     |
=======",
];

static ADVANCED: ArtSet = [
    r" ╔════╗
 ║    │
 ║
 ║
 ║
 ║
═╩══════",
    r" ╔════╗
 ║    │
 ║    ◯
 ║
 ║
 ║
═╩══════",
    r" ╔════╗
 ║    │
 ║    ◯
 ║    ┃
 ║    ┃
 ║
═╩══════",
    r" ╔════╗
 ║    │
 ║    ◯
 ║   ╱┃
 ║    ┃
 ║
═╩══════",
    r" ╔════╗
 ║    │
 ║    ◯
 ║   ╱┃╲
 ║    ┃
 ║
═╩══════",
    r" ╔════╗
 ║    │
 ║    ◯
 ║   ╱┃╲
 ║    ┃
 ║   ╱
═╩══════",
    r" ╔════╗
 ║    │
 ║    ◯
 ║   ╱┃╲
 ║    ┃
 ║   ╱ ╲
═╩══════",
];

pub fn art_set(mode: Mode) -> &'static ArtSet {
    match mode {
        Mode::Basic => &BASIC,
        Mode::Advanced => &ADVANCED,
    }
}

/// The frame for a given miss count, clamped to the final stage.
pub fn stage(mode: Mode, misses: usize) -> &'static str {
    art_set(mode)[misses.min(STAGES - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_frames_per_set() {
        assert_eq!(art_set(Mode::Basic).len(), STAGES);
        assert_eq!(art_set(Mode::Advanced).len(), STAGES);
    }

    #[test]
    fn test_frames_are_ordered_and_distinct() {
        for mode in [Mode::Basic, Mode::Advanced] {
            let set = art_set(mode);
            for pair in set.windows(2) {
                assert_ne!(pair[0], pair[1]);
                // each stage only ever adds ink
                assert!(pair[1].chars().filter(|c| !c.is_whitespace()).count()
                    > pair[0].chars().filter(|c| !c.is_whitespace()).count());
            }
        }
    }

    #[test]
    fn test_frames_have_uniform_height() {
        for mode in [Mode::Basic, Mode::Advanced] {
            for frame in art_set(mode) {
                assert_eq!(frame.lines().count(), 7);
            }
        }
    }

    #[test]
    fn test_stage_zero_is_bare() {
        assert!(!stage(Mode::Basic, 0).contains('O'));
        assert!(!stage(Mode::Advanced, 0).contains('◯'));
    }

    #[test]
    fn test_stage_six_is_complete() {
        assert!(stage(Mode::Basic, 6).contains(r"/ \"));
        assert!(stage(Mode::Advanced, 6).contains("╱ ╲"));
    }

    #[test]
    fn test_stage_clamps_past_the_end() {
        assert_eq!(stage(Mode::Basic, 6), stage(Mode::Basic, 12));
    }

    #[test]
    fn test_sets_differ() {
        assert_ne!(stage(Mode::Basic, 3), stage(Mode::Advanced, 3));
    }
}
