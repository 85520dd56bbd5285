use crate::domain::model::{Move, Rod, Rods};
use crate::utils::error::{HanoiError, Result};
use std::iter::FusedIterator;

/// Largest disk count whose move count `2^n - 1` still fits in a `u64`.
pub const MAX_DISKS: u32 = 64;

/// 解 `disks` 個盤子所需的步數 (2^n - 1)
pub fn move_count(disks: u32) -> Option<u64> {
    match disks {
        0..=63 => Some((1u64 << disks) - 1),
        64 => Some(u64::MAX),
        _ => None,
    }
}

/// Lazily generates the moves that transfer `disks` disks from `source` to
/// `destination`, using `auxiliary` as the spare rod.
///
/// Zero disks yields an empty sequence. The rods must be distinct and
/// `disks` may not exceed [`MAX_DISKS`].
pub fn generate(disks: u32, source: Rod, destination: Rod, auxiliary: Rod) -> Result<Moves> {
    let rods = Rods::new(source, destination, auxiliary)?;
    Moves::new(disks, rods)
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Transfer { disks: u32, from: Rod, to: Rod, via: Rod },
    Single(Move),
}

/// Move sequence iterator. Keeps an explicit frame stack instead of recursing,
/// so memory stays at O(n) and each move is yielded as soon as it is known.
#[derive(Debug, Clone)]
pub struct Moves {
    stack: Vec<Frame>,
    remaining: u64,
}

impl Moves {
    pub fn new(disks: u32, rods: Rods) -> Result<Self> {
        let remaining = move_count(disks).ok_or(HanoiError::ResourceExhausted {
            disks: u64::from(disks),
            limit: MAX_DISKS,
        })?;

        // 展開後堆疊深度不超過 2n + 1
        let mut stack = Vec::with_capacity(2 * disks as usize + 1);
        if disks > 0 {
            stack.push(Frame::Transfer {
                disks,
                from: rods.source(),
                to: rods.destination(),
                via: rods.auxiliary(),
            });
        }

        Ok(Self { stack, remaining })
    }

    /// Moves not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            let mv = match self.stack.pop()? {
                Frame::Single(mv) => mv,
                Frame::Transfer {
                    disks: 1, from, to, ..
                } => Move { disk: 1, from, to },
                Frame::Transfer {
                    disks,
                    from,
                    to,
                    via,
                } => {
                    // pushed in reverse: the top of the stack runs first
                    self.stack.push(Frame::Transfer {
                        disks: disks - 1,
                        from: via,
                        to,
                        via: from,
                    });
                    self.stack.push(Frame::Single(Move { disk: disks, from, to }));
                    self.stack.push(Frame::Transfer {
                        disks: disks - 1,
                        from,
                        to: via,
                        via: to,
                    });
                    continue;
                }
            };

            self.remaining -= 1;
            return Some(mv);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Moves {}
