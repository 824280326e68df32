//! Canonical ordering of combining marks.

use crate::tables::Tables;

/// Put every run of non-starters into canonical order.
///
/// Each maximal run of codepoints with a non-zero combining class is sorted
/// by class with a stable insertion sort. Starters never move, and marks of
/// equal class keep their relative order.
pub fn reorder(tables: &Tables<'_>, codepoints: &mut [u32]) {
    let mut classes: Vec<u8> = Vec::new();
    let mut index = 0;

    while index < codepoints.len() {
        if tables.combining_class(codepoints[index]) == 0 {
            index += 1;
            continue;
        }

        let start = index;
        classes.clear();
        while let Some(&cp) = codepoints.get(index) {
            let class = tables.combining_class(cp);
            if class == 0 {
                break;
            }
            classes.push(class);
            index += 1;
        }

        if classes.len() > 1 {
            sort_run(&mut codepoints[start..index], &mut classes);
        }
    }
}

fn sort_run(run: &mut [u32], classes: &mut [u8]) {
    for i in 1..run.len() {
        let mut j = i;
        while j > 0 && classes[j - 1] > classes[j] {
            classes.swap(j - 1, j);
            run.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reordered(cps: &[u32]) -> Vec<u32> {
        let mut out = cps.to_vec();
        reorder(Tables::unicode(), &mut out);
        out
    }

    #[test]
    fn test_sorts_by_class() {
        // a + ACUTE (230) + DOT BELOW (220)
        assert_eq!(reordered(&[0x61, 0x301, 0x323]), vec![0x61, 0x323, 0x301]);
    }

    #[test]
    fn test_equal_classes_keep_order() {
        // classes [220, 230, 220]: the two 220 marks keep their order
        assert_eq!(
            reordered(&[0x61, 0x316, 0x301, 0x317]),
            vec![0x61, 0x316, 0x317, 0x301]
        );
        // ACUTE and GRAVE are both 230 and must not swap
        assert_eq!(reordered(&[0x61, 0x301, 0x300]), vec![0x61, 0x301, 0x300]);
    }

    #[test]
    fn test_starters_do_not_move() {
        // The starter b splits the marks into two independent runs
        assert_eq!(
            reordered(&[0x301, 0x323, 0x62, 0x345, 0x301]),
            vec![0x323, 0x301, 0x62, 0x301, 0x345]
        );
    }

    #[test]
    fn test_already_ordered_is_untouched() {
        let cps = [0x5D0, 0x5B0, 0x5B8, 0x5BC];
        assert_eq!(reordered(&cps), cps.to_vec());
        assert_eq!(reordered(&[]), Vec::<u32>::new());
    }
}
