/// Cycle detection over an [`Adjacency`] list.
///
/// # Algorithm Overview
///
/// Three-colour depth-first search. Every node starts White. Entering a node
/// turns it Gray, and it stays Gray while it is on the current DFS path;
/// once all of its successors are exhausted it turns Black. Reaching a Gray
/// successor means the edge closes a loop back onto the current path, so
/// the graph has a cycle. Edges into Black nodes (forward and cross edges)
/// are never reported.
///
/// Roots are tried in ascending index order and any node that is no longer
/// White is skipped, so each node is entered exactly once overall.
///
/// The traversal keeps an explicit stack of `(node, next_successor)` frames
/// instead of recursing, so arbitrarily long chains cannot exhaust the
/// thread's call stack.
use crate::adjacency::Adjacency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns `true` if `adjacency` contains at least one directed cycle.
///
/// Self-loops count as cycles of length one.
pub fn has_cycle(adjacency: &Adjacency) -> bool {
    find_cycle(adjacency).is_some()
}

/// Finds one directed cycle, if any exists.
///
/// The returned vector lists the cycle's nodes in traversal order and
/// repeats the first node at the end (closed representation), so a
/// self-loop on `3` is `[3, 3]` and the two-cycle `0 -> 1 -> 0` is
/// `[0, 1, 0]`. Returns `None` for acyclic graphs.
pub fn find_cycle(adjacency: &Adjacency) -> Option<Vec<usize>> {
    let n = adjacency.node_count();
    let mut color = vec![Color::White; n];

    // Each frame: (node, index of the next successor to explore). The
    // nodes on the stack are exactly the Gray nodes, in path order.
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if color.get(root) != Some(&Color::White) {
            continue;
        }
        set_color(&mut color, root, Color::Gray);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let Some(&next) = adjacency.successors(node).get(frame.1) else {
                // All successors explored: backtrack.
                set_color(&mut color, node, Color::Black);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match color.get(next).copied() {
                Some(Color::Gray) => {
                    let mut cycle: Vec<usize> = stack
                        .iter()
                        .map(|&(n, _)| n)
                        .skip_while(|&n| n != next)
                        .collect();
                    cycle.push(next);
                    tracing::debug!(root, length = cycle.len() - 1, "back edge found");
                    return Some(cycle);
                }
                Some(Color::White) => {
                    set_color(&mut color, next, Color::Gray);
                    stack.push((next, 0));
                }
                Some(Color::Black) | None => {}
            }
        }
    }

    None
}

fn set_color(color: &mut [Color], node: usize, value: Color) {
    if let Some(c) = color.get_mut(node) {
        *c = value;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
