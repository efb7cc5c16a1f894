#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Lock constraint engine for scripted parties generated before a shadow capture.
//!
//! The console games generate every member of an opponent's party from one
//! continuous [`XdRng`] chain and the capturable shadow comes last. A lock pins
//! the nature and gender a member must roll, so only some frame seeds can
//! produce the shadow at all. Every check here is a pure predicate over the
//! seed chain; retrying is the generator's job.

use pidlab_core::{Gender, Lock, LockKind, LockSequence, Nature};
use pidlab_system_rng::{cxd_block, LinearCongruential, XdRng};

/// Generator steps each party member consumes.
pub const MEMBER_STEPS: u32 = 5;

/// Frame seed of party member `member` of a `party_len` sized sequence that
/// precedes the specimen generated from `frame_seed`.
#[must_use]
pub fn member_seed(frame_seed: u32, member: usize, party_len: usize) -> u32 {
    let distance = party_len.saturating_sub(member) as u32;
    XdRng::rewind(frame_seed, distance * MEMBER_STEPS)
}

/// Nature and gender a locked member rolls from its own frame seed.
#[must_use]
pub fn member_attributes(lock: &Lock, seed: u32) -> (Nature, Gender) {
    let pid = cxd_block(seed).pid;
    (Nature::from_pid(pid), lock.ratio().gender_from_pid(pid))
}

/// Whether a candidate generated from `frame_seed` with the derived `nature`
/// and `gender` satisfies `sequence`.
///
/// Terminal sequences check only their last entry against the candidate. Party
/// sequences re-derive every preceding member and fail on the first mismatch.
#[must_use]
pub fn is_valid(sequence: &LockSequence, nature: Nature, gender: Gender, frame_seed: u32) -> bool {
    match sequence.kind() {
        LockKind::Terminal => sequence
            .last()
            .map_or(true, |lock| lock.accepts(nature, gender)),
        LockKind::Party => {
            let party_len = sequence.len();
            sequence.locks().iter().enumerate().all(|(member, lock)| {
                let (nature, gender) =
                    member_attributes(lock, member_seed(frame_seed, member, party_len));
                lock.accepts(nature, gender)
            })
        }
    }
}

/// Whether any alternative party accepts the candidate; no alternatives means unlocked.
#[must_use]
pub fn is_any_valid(
    alternatives: &[LockSequence],
    nature: Nature,
    gender: Gender,
    frame_seed: u32,
) -> bool {
    alternatives.is_empty()
        || alternatives
            .iter()
            .any(|sequence| is_valid(sequence, nature, gender, frame_seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pidlab_core::{GenderRatio, LockGender};

    #[test]
    fn last_member_sits_one_stride_before_the_frame() {
        assert_eq!(member_seed(0x1000, 2, 3), XdRng::rewind(0x1000, 5));
        assert_eq!(member_seed(0x1000, 0, 3), XdRng::rewind(0x1000, 15));
    }

    #[test]
    fn empty_terminal_sequence_accepts() {
        let empty = LockSequence::terminal(Vec::new());
        assert!(is_valid(&empty, Nature::from_pid(0), Gender::Male, 0));
        assert!(is_any_valid(&[], Nature::from_pid(0), Gender::Male, 0));
    }

    #[test]
    fn terminal_sequence_checks_only_the_last_entry() {
        let wrong = Lock::new(1, Nature::from_pid(3), LockGender::Any, GenderRatio::EVEN);
        let right = Lock::new(
            2,
            Nature::from_pid(7),
            LockGender::Exact(Gender::Female),
            GenderRatio::EVEN,
        );
        let sequence = LockSequence::terminal(vec![wrong, right]);
        assert!(is_valid(&sequence, Nature::from_pid(7), Gender::Female, 0));
        assert!(!is_valid(&sequence, Nature::from_pid(7), Gender::Male, 0));
        assert!(!is_valid(&sequence, Nature::from_pid(3), Gender::Female, 0));
    }
}
