use colored::Colorize;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }
}

impl<T> Edit<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { value } => format!("-{}", value.clone().into()),
            Edit::Insert { value } => format!("+{}", value.clone().into()),
            Edit::Equal { value } => format!(" {}", value.clone().into()),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edit::Delete { .. } => write!(f, "{}", self.as_string().red()),
            Edit::Insert { .. } => write!(f, "{}", self.as_string().green()),
            Edit::Equal { .. } => write!(f, "{}", self.as_string()),
        }
    }
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;
}

/// Edit distance past which Myers gives up and the whole of `a` is replaced by `b`.
/// Trace memory grows with the square of this bound.
pub const MAX_EDIT_DISTANCE: isize = 2048;

/// Myers' O(ND) shortest edit script between two sequences
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> MyersDiff<'d, T> {
    /// Delete every line of `a`, then insert every line of `b`
    fn replace_all(&self) -> Vec<Edit<T>> {
        self.a
            .iter()
            .map(|value| Edit::Delete {
                value: value.clone(),
            })
            .chain(self.b.iter().map(|value| Edit::Insert {
                value: value.clone(),
            }))
            .collect()
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    /// Row `d` holds the furthest x per diagonal k in `-(d + 1)..=(d + 1)`,
    /// as it stood before step `d`; None once the distance passes the bound
    type Trace = Option<Vec<Vec<isize>>>;
    type EditPath = Option<Vec<(isize, isize, isize, isize)>>;
    type EditScript = Vec<Edit<T>>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;
        // diagonal k lives at v[base + k]; one spare slot on each side
        let base = offset as isize + 1;

        let mut v = vec![0; 2 * offset + 4];

        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            if d > MAX_EDIT_DISTANCE {
                return None;
            }

            let window = (base - d - 1) as usize..=(base + d + 1) as usize;
            trace.push(v[window].to_vec());

            for k in (-d..=d).step_by(2) {
                let idx = (base + k) as usize;

                let mut x = if k == -d {
                    // only reachable from k+1, an insertion
                    v[idx + 1]
                } else if k == d {
                    // only reachable from k-1, a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return Some(trace);
                }
            }
        }

        Some(trace)
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit()?;

        for (d, row) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let at = |k: isize| row[(k + d + 1) as usize];
            let k = x - y;

            let prev_k = if k == -d {
                k + 1
            } else if k == d {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if at(k_del) + 1 > at(k_ins) { k_del } else { k_ins }
            };

            let prev_x = at(prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        Some(edit_path)
    }

    fn diff(&self) -> Self::EditScript {
        let mut diff = Vec::new();

        if self.a.is_empty() && self.b.is_empty() {
            return diff;
        }

        let Some(edit_path) = self.backtrack() else {
            tracing::debug!(
                old = self.a.len(),
                new = self.b.len(),
                "edit distance too large, replacing every line"
            );
            return self.replace_all();
        };

        for (prev_x, prev_y, x, y) in edit_path {
            if x == prev_x {
                // Insert: only y increased
                if prev_y >= 0 && prev_y < self.b.len() as isize {
                    diff.push(Edit::Insert {
                        value: self.b[prev_y as usize].clone(),
                    });
                }
            } else if y == prev_y {
                // Delete: only x increased
                if prev_x >= 0 && prev_x < self.a.len() as isize {
                    diff.push(Edit::Delete {
                        value: self.a[prev_x as usize].clone(),
                    });
                }
            } else if prev_x >= 0 && prev_x < self.a.len() as isize {
                // Equal: diagonal move
                diff.push(Edit::Equal {
                    value: self.a[prev_x as usize].clone(),
                });
            }
        }

        diff.reverse();
        diff
    }
}
