//! Known valid partitions.

use tripart_core::{Dimensions, Group, Pair, Solution, Triple};

/// The unique partition for `g = 1`: each pair keeps the three remaining elements.
pub const G1_SOLUTION: &str = "\
Group 1\t(omitted pair: (0, 1)): \t[(2, 3, 4)]\n\
Group 2\t(omitted pair: (0, 2)): \t[(1, 3, 4)]\n\
Group 3\t(omitted pair: (0, 3)): \t[(1, 2, 4)]\n\
Group 4\t(omitted pair: (0, 4)): \t[(1, 2, 3)]\n\
Group 5\t(omitted pair: (1, 2)): \t[(0, 3, 4)]\n\
Group 6\t(omitted pair: (1, 3)): \t[(0, 2, 4)]\n\
Group 7\t(omitted pair: (1, 4)): \t[(0, 2, 3)]\n\
Group 8\t(omitted pair: (2, 3)): \t[(0, 1, 4)]\n\
Group 9\t(omitted pair: (2, 4)): \t[(0, 1, 3)]\n\
Group 10\t(omitted pair: (3, 4)): \t[(0, 1, 2)]\n\
";

/// A partition for `g = 2` with pair (0, 1) holding `(2, 3, 4), (5, 6, 7)`.
pub const G2_SOLUTION: &str = "\
Group 1\t(omitted pair: (0, 1)): \t[(2, 3, 4),(5, 6, 7)]\n\
Group 2\t(omitted pair: (0, 2)): \t[(1, 5, 7),(3, 4, 6)]\n\
Group 3\t(omitted pair: (0, 3)): \t[(1, 5, 6),(2, 4, 7)]\n\
Group 4\t(omitted pair: (0, 4)): \t[(1, 6, 7),(2, 3, 5)]\n\
Group 5\t(omitted pair: (0, 5)): \t[(1, 4, 7),(2, 3, 6)]\n\
Group 6\t(omitted pair: (0, 6)): \t[(1, 4, 5),(2, 3, 7)]\n\
Group 7\t(omitted pair: (0, 7)): \t[(1, 3, 4),(2, 5, 6)]\n\
Group 8\t(omitted pair: (1, 2)): \t[(0, 6, 7),(3, 4, 5)]\n\
Group 9\t(omitted pair: (1, 3)): \t[(0, 4, 6),(2, 5, 7)]\n\
Group 10\t(omitted pair: (1, 4)): \t[(0, 3, 5),(2, 6, 7)]\n\
Group 11\t(omitted pair: (1, 5)): \t[(0, 2, 3),(4, 6, 7)]\n\
Group 12\t(omitted pair: (1, 6)): \t[(0, 3, 7),(2, 4, 5)]\n\
Group 13\t(omitted pair: (1, 7)): \t[(0, 2, 4),(3, 5, 6)]\n\
Group 14\t(omitted pair: (2, 3)): \t[(0, 5, 7),(1, 4, 6)]\n\
Group 15\t(omitted pair: (2, 4)): \t[(0, 1, 5),(3, 6, 7)]\n\
Group 16\t(omitted pair: (2, 5)): \t[(0, 1, 6),(3, 4, 7)]\n\
Group 17\t(omitted pair: (2, 6)): \t[(0, 1, 4),(3, 5, 7)]\n\
Group 18\t(omitted pair: (2, 7)): \t[(0, 1, 3),(4, 5, 6)]\n\
Group 19\t(omitted pair: (3, 4)): \t[(0, 5, 6),(1, 2, 7)]\n\
Group 20\t(omitted pair: (3, 5)): \t[(0, 1, 7),(2, 4, 6)]\n\
Group 21\t(omitted pair: (3, 6)): \t[(0, 1, 2),(4, 5, 7)]\n\
Group 22\t(omitted pair: (3, 7)): \t[(0, 4, 5),(1, 2, 6)]\n\
Group 23\t(omitted pair: (4, 5)): \t[(0, 2, 6),(1, 3, 7)]\n\
Group 24\t(omitted pair: (4, 6)): \t[(0, 2, 7),(1, 3, 5)]\n\
Group 25\t(omitted pair: (4, 7)): \t[(0, 2, 5),(1, 3, 6)]\n\
Group 26\t(omitted pair: (5, 6)): \t[(0, 4, 7),(1, 2, 3)]\n\
Group 27\t(omitted pair: (5, 7)): \t[(0, 3, 6),(1, 2, 4)]\n\
Group 28\t(omitted pair: (6, 7)): \t[(0, 3, 4),(1, 2, 5)]\n\
";

/// Builds the `g = 1` partition as a [`Solution`], groups in pair index order.
pub fn g1_solution() -> Solution {
    let dims = Dimensions::for_group_size(1).expect("g = 1 is valid");
    let y = dims.element_count();
    let mut groups = Vec::new();
    for a in 0..y {
        for b in (a + 1)..y {
            let rest: Vec<_> = (0..y).filter(|&e| e != a && e != b).collect();
            groups.push(Group::new(
                Pair::new(a, b),
                vec![Triple::new(rest[0], rest[1], rest[2])],
            ));
        }
    }
    Solution::new(dims, groups).expect("one group per pair")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_line_counts() {
        assert_eq!(G1_SOLUTION.lines().count(), 10);
        assert_eq!(G2_SOLUTION.lines().count(), 28);
        assert!(G2_SOLUTION.starts_with("Group 1\t(omitted pair: (0, 1)): \t[(2, 3, 4),(5, 6, 7)]\n"));
    }

    #[test]
    fn test_g1_solution_matches_text() {
        let solution = g1_solution();
        assert_eq!(solution.groups().len(), 10);
        assert_eq!(solution.group(0).triples, vec![Triple::new(2, 3, 4)]);
        assert_eq!(solution.group(9).omitted, Pair::new(3, 4));
    }
}
