use crate::core::MAX_TILE;

/// Slides a row towards index 0, merging equal neighbours at most once each.
/// Returns the new row and the score gained from merges. Tiles at `MAX_TILE`
/// never merge and the gain saturates at `u32::MAX`.
pub fn reduce_left(row: &[u32]) -> (Vec<u32>, u32) {
    let mut merged = compact(row);
    let mut gained: u32 = 0;

    let mut i = 0;
    while i + 1 < merged.len() {
        let value = merged[i];
        if value != 0 && value < MAX_TILE && merged[i + 1] == value {
            merged[i] = 0;
            merged[i + 1] = value * 2;
            gained = gained.saturating_add(value * 2);
            // the merged tile may not merge again this move
            i += 2;
        } else {
            i += 1;
        }
    }

    (compact(&merged), gained)
}

fn compact(row: &[u32]) -> Vec<u32> {
    let mut result: Vec<u32> = row.iter().copied().filter(|&v| v != 0).collect();
    result.resize(row.len(), 0);
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pairs_merge_left_to_right_without_cascading() {
        assert_eq!(reduce_left(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
    }

    #[test]
    fn gaps_close_before_merging() {
        assert_eq!(reduce_left(&[2, 0, 2, 4]), (vec![4, 4, 0, 0], 4));
    }

    #[test]
    fn odd_run_leaves_trailing_tile() {
        assert_eq!(reduce_left(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
        assert_eq!(reduce_left(&[0, 4, 4, 4]), (vec![8, 4, 0, 0], 8));
    }

    #[test]
    fn merged_tile_does_not_merge_with_equal_neighbour() {
        assert_eq!(reduce_left(&[4, 2, 2, 0]), (vec![4, 4, 0, 0], 4));
        assert_eq!(reduce_left(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4));
    }

    #[test]
    fn nothing_to_do_is_unchanged() {
        assert_eq!(reduce_left(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], 0));
        assert_eq!(reduce_left(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
        assert_eq!(reduce_left(&[]), (vec![], 0));
    }

    #[test]
    fn length_is_preserved() {
        let row = [0, 2, 0, 2, 0, 8, 8];
        let (reduced, gained) = reduce_left(&row);
        assert_eq!(reduced, vec![4, 16, 0, 0, 0, 0, 0]);
        assert_eq!(gained, 20);
        assert_eq!(reduced.len(), row.len());
    }

    #[test]
    fn reduced_row_has_no_gaps() {
        let rows: [&[u32]; 4] = [&[0, 2, 0, 4], &[2, 0, 2, 4], &[8, 0, 0, 8], &[0, 0, 0, 2]];
        for row in rows {
            let (once, _) = reduce_left(row);
            let first_zero = once.iter().position(|&v| v == 0).unwrap_or(once.len());
            assert!(once[first_zero..].iter().all(|&v| v == 0), "gap left in {:?}", once);
        }
    }

    #[test]
    fn second_reduction_only_changes_row_through_new_merges() {
        let rows: [&[u32]; 6] = [
            &[2, 2, 2, 2],
            &[2, 0, 2, 4],
            &[4, 4, 8, 8],
            &[0, 0, 2, 2],
            &[16, 8, 8, 16],
            &[2, 4, 0, 8],
        ];
        for row in rows {
            let (once, _) = reduce_left(row);
            let (twice, gained) = reduce_left(&once);
            if gained == 0 {
                assert_eq!(twice, once, "row {:?} shifted on second reduction", row);
            } else {
                assert!(twice.iter().filter(|&&v| v != 0).count() < once.iter().filter(|&&v| v != 0).count());
            }
        }
    }

    #[test]
    fn largest_tiles_stay_put() {
        assert_eq!(reduce_left(&[1 << 31, 1 << 31]), (vec![1 << 31, 1 << 31], 0));
        assert_eq!(reduce_left(&[0, 1 << 31, 0, 1 << 31]), (vec![1 << 31, 1 << 31, 0, 0], 0));
    }

    #[test]
    fn gain_saturates_instead_of_wrapping() {
        let (reduced, gained) = reduce_left(&[1 << 30, 1 << 30, 1 << 30, 1 << 30]);
        assert_eq!(reduced, vec![1 << 31, 1 << 31, 0, 0]);
        assert_eq!(gained, u32::MAX);
    }

    #[test]
    fn merged_pairs_need_another_move_to_merge_again() {
        let (once, gained) = reduce_left(&[2, 2, 2, 2]);
        assert_eq!((once.clone(), gained), (vec![4, 4, 0, 0], 8));
        assert_eq!(reduce_left(&once), (vec![8, 0, 0, 0], 8));
    }
}
