use rand::Rng;


/// Removes and returns a uniformly random element of `candidates`,
/// or `None` if there are none.
pub fn choose_quiz_question<T, R>(mut candidates: Vec<T>, rng: &mut R) -> Option<T>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }

    let chosen_index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(chosen_index))
}



#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn nothing_to_choose_from() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(choose_quiz_question(Vec::<u32>::new(), &mut rng), None);
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(choose_quiz_question(vec![12], &mut rng), Some(12));
        }
    }

    #[test]
    fn chooses_only_from_candidates_and_eventually_all_of_them() {
        let mut rng = StdRng::seed_from_u64(2024);
        let candidates = vec![2, 4, 9, 16, 23];

        let mut seen = BTreeSet::new();
        for _ in 0..500 {
            let chosen = choose_quiz_question(candidates.clone(), &mut rng).unwrap();

            assert!(candidates.contains(&chosen));
            seen.insert(chosen);
        }

        assert_eq!(
            seen.into_iter().collect::<Vec<_>>(),
            candidates
        );
    }
}
