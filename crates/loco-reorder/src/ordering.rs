//! Reverse Cuthill-McKee vertex orderings.
//!
//! Both orderings share the same level-structure traversal: seed each
//! connected component with a pseudo-peripheral vertex, breadth-first
//! visit the component, concatenate the component orders, and reverse
//! the whole visitation sequence. They differ only in how a vertex's
//! unvisited neighbors are ranked at each step.

use std::cmp::Reverse;

use crate::csr::CsrMatrix;

/// Compute the classical Reverse Cuthill-McKee ordering.
///
/// Neighbors are visited in ascending structural degree, ties broken by
/// ascending vertex index. The returned permutation `perm` satisfies
/// `perm[new_index] = old_index`, is a bijection on `0..n`, and is
/// deterministic. Weights are ignored.
pub fn reverse_cuthill_mckee(matrix: &CsrMatrix) -> Vec<usize> {
    cuthill_mckee(matrix, NeighborRank::Degree)
}

/// Compute the weighted Reverse Cuthill-McKee ordering.
///
/// Neighbors are visited in descending edge weight from the current
/// vertex, so heavier interactions are placed closer together; ties are
/// broken by ascending degree, then ascending vertex index. This variant
/// targets weighted-profile reduction rather than pure bandwidth.
pub fn weighted_reverse_cuthill_mckee(matrix: &CsrMatrix) -> Vec<usize> {
    cuthill_mckee(matrix, NeighborRank::Weight)
}

/// How unvisited neighbors are ranked during the BFS.
#[derive(Clone, Copy)]
enum NeighborRank {
    /// Ascending degree, then ascending index.
    Degree,
    /// Descending edge weight, then ascending degree, then ascending index.
    Weight,
}

fn cuthill_mckee(matrix: &CsrMatrix, rank: NeighborRank) -> Vec<usize> {
    let n = matrix.num_rows();
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut nbrs: Vec<(usize, u32)> = Vec::new();

    while order.len() < n {
        // Seed the next component with a pseudo-peripheral vertex grown
        // from the minimum-degree unvisited vertex.
        let Some(seed) = (0..n)
            .filter(|&v| !visited[v])
            .min_by_key(|&v| (matrix.degree(v), v))
        else {
            break;
        };
        let start = pseudo_peripheral(matrix, seed);

        // Level-by-level traversal; `order` doubles as the BFS queue.
        let mut head = order.len();
        visited[start] = true;
        order.push(start);
        while head < order.len() {
            let v = order[head];
            head += 1;

            nbrs.clear();
            for (&u, &w) in matrix.row_cols(v).iter().zip(matrix.row_values(v)) {
                if !visited[u] {
                    nbrs.push((u, w));
                }
            }
            match rank {
                NeighborRank::Degree => {
                    nbrs.sort_unstable_by_key(|&(u, _)| (matrix.degree(u), u));
                }
                NeighborRank::Weight => {
                    nbrs.sort_unstable_by_key(|&(u, w)| (Reverse(w), matrix.degree(u), u));
                }
            }
            for &(u, _) in &nbrs {
                visited[u] = true;
                order.push(u);
            }
        }
    }

    // The last-visited vertex becomes index 0.
    order.reverse();
    order
}

/// Find a pseudo-peripheral vertex of the component containing `seed`.
///
/// Repeated BFS sweeps: from the current vertex, take the minimum-degree
/// vertex of the farthest level (tie: lowest index) and move there while
/// the eccentricity keeps growing.
fn pseudo_peripheral(matrix: &CsrMatrix, seed: usize) -> usize {
    let mut current = seed;
    let (mut ecc, mut last_level) = bfs_levels(matrix, current);

    loop {
        let candidate = last_level
            .iter()
            .copied()
            .min_by_key(|&v| (matrix.degree(v), v))
            .unwrap_or(current);
        if candidate == current {
            return current;
        }
        let (cand_ecc, cand_last) = bfs_levels(matrix, candidate);
        if cand_ecc > ecc {
            current = candidate;
            ecc = cand_ecc;
            last_level = cand_last;
        } else {
            return candidate;
        }
    }
}

/// BFS from `start`, returning its eccentricity within its component and
/// the vertices of the farthest level.
fn bfs_levels(matrix: &CsrMatrix, start: usize) -> (usize, Vec<usize>) {
    let n = matrix.num_rows();
    let mut depth = vec![usize::MAX; n];
    let mut frontier = vec![start];
    depth[start] = 0;
    let mut ecc = 0;
    let mut last_level = frontier.clone();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &v in &frontier {
            for &u in matrix.row_cols(v) {
                if depth[u] == usize::MAX {
                    depth[u] = depth[v] + 1;
                    next.push(u);
                }
            }
        }
        if !next.is_empty() {
            ecc += 1;
            last_level.clone_from(&next);
        }
        frontier = next;
    }
    (ecc, last_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::Metrics;
    use crate::permute::sparse_permute;

    fn from_edges(n: usize, edges: &[(usize, usize, u32)]) -> CsrMatrix {
        let mut entries: Vec<(usize, usize, u32)> = vec![];
        for &(a, b, w) in edges {
            entries.push((a, b, w));
            entries.push((b, a, w));
        }
        entries.sort_unstable();
        let mut row_ptr = vec![0usize; n + 1];
        for &(r, _, _) in &entries {
            row_ptr[r + 1] += 1;
        }
        for i in 1..=n {
            row_ptr[i] += row_ptr[i - 1];
        }
        let cols: Vec<usize> = entries.iter().map(|&(_, c, _)| c).collect();
        let vals: Vec<u32> = entries.iter().map(|&(_, _, w)| w).collect();
        CsrMatrix::new(n, vals, cols, row_ptr).unwrap()
    }

    fn assert_bijection(perm: &[usize], n: usize) {
        assert_eq!(perm.len(), n);
        let mut seen = vec![false; n];
        for &p in perm {
            assert!(p < n, "index {p} out of range");
            assert!(!seen[p], "index {p} repeated");
            seen[p] = true;
        }
    }

    #[test]
    fn test_path_in_order_stays_optimal() {
        let g = from_edges(5, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)]);
        let perm = reverse_cuthill_mckee(&g);
        assert_bijection(&perm, 5);

        let permuted = sparse_permute(&g, &perm, &perm).unwrap();
        let m = Metrics::measure(&permuted).unwrap();
        assert!(m.bandwidth <= 1);
    }

    #[test]
    fn test_scrambled_path_reduced_to_bandwidth_one() {
        // Path graph 0-3-1-2 has bandwidth 3 under the identity labeling.
        let g = from_edges(4, &[(0, 3, 1), (3, 1, 1), (1, 2, 1)]);
        assert_eq!(Metrics::measure(&g).unwrap().bandwidth, 3);

        let perm = reverse_cuthill_mckee(&g);
        assert_bijection(&perm, 4);

        let permuted = sparse_permute(&g, &perm, &perm).unwrap();
        assert_eq!(Metrics::measure(&permuted).unwrap().bandwidth, 1);
    }

    #[test]
    fn test_complete_graph() {
        let mut edges = vec![];
        for a in 0..5 {
            for b in (a + 1)..5 {
                edges.push((a, b, 1));
            }
        }
        let g = from_edges(5, &edges);
        let perm = reverse_cuthill_mckee(&g);
        assert_bijection(&perm, 5);

        let permuted = sparse_permute(&g, &perm, &perm).unwrap();
        assert_eq!(Metrics::measure(&permuted).unwrap().bandwidth, 4);
    }

    #[test]
    fn test_disconnected_components_all_ordered() {
        let g = from_edges(7, &[(0, 1, 1), (1, 2, 1), (4, 5, 1), (5, 6, 1)]);
        let perm = reverse_cuthill_mckee(&g);
        assert_bijection(&perm, 7);
    }

    #[test]
    fn test_isolated_vertices_only() {
        let g = CsrMatrix::empty(4);
        let perm = reverse_cuthill_mckee(&g);
        assert_bijection(&perm, 4);
    }

    #[test]
    fn test_deterministic() {
        let g = from_edges(6, &[(0, 2, 1), (2, 4, 2), (4, 1, 1), (1, 3, 3), (3, 5, 1)]);
        assert_eq!(reverse_cuthill_mckee(&g), reverse_cuthill_mckee(&g));
        assert_eq!(
            weighted_reverse_cuthill_mckee(&g),
            weighted_reverse_cuthill_mckee(&g)
        );
    }

    #[test]
    fn test_weighted_variant_is_valid_ordering() {
        // Star with one heavy spoke: the heavy neighbor must be visited
        // first from the hub.
        let g = from_edges(4, &[(0, 1, 1), (0, 2, 9), (0, 3, 1)]);
        let perm = weighted_reverse_cuthill_mckee(&g);
        assert_bijection(&perm, 4);

        let permuted = sparse_permute(&g, &perm, &perm).unwrap();
        let m = Metrics::measure(&permuted).unwrap();
        // Hub and its heavy neighbor end up adjacent.
        let hub_new = perm.iter().position(|&old| old == 0).unwrap();
        let heavy_new = perm.iter().position(|&old| old == 2).unwrap();
        assert_eq!(hub_new.abs_diff(heavy_new), 1);
        assert!(m.bandwidth <= 3);
    }

    #[test]
    fn test_weighted_profile_not_worse_on_weighted_chain() {
        // Chain with a heavy far edge under identity labeling.
        let g = from_edges(5, &[(0, 4, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)]);
        let before = Metrics::measure(&g).unwrap();

        let perm = weighted_reverse_cuthill_mckee(&g);
        let permuted = sparse_permute(&g, &perm, &perm).unwrap();
        let after = Metrics::measure(&permuted).unwrap();
        assert!(after.profile <= before.profile);
    }
}
