use crate::domain::model::{Move, Rod, Rods};
use crate::utils::error::{HanoiError, Result};

/// Three-stack model of the puzzle. Each stack is bottom-to-top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    disks: u32,
    labels: [Rod; 3],
    stacks: [Vec<u32>; 3],
}

impl Towers {
    /// All `disks` disks start on the source rod, largest at the bottom.
    pub fn new(disks: u32, rods: Rods) -> Self {
        let source = (1..=disks).rev().collect();
        Self {
            disks,
            labels: rods.as_array(),
            stacks: [source, Vec::new(), Vec::new()],
        }
    }

    fn index_of(&self, rod: Rod) -> Option<usize> {
        self.labels.iter().position(|&r| r == rod)
    }

    pub fn rod(&self, rod: Rod) -> Option<&[u32]> {
        self.index_of(rod).map(|i| self.stacks[i].as_slice())
    }

    pub fn apply(&mut self, mv: &Move) -> Result<()> {
        let illegal = |reason: String| HanoiError::IllegalMove {
            mv: *mv,
            reason,
        };

        let from = self
            .index_of(mv.from)
            .ok_or_else(|| illegal(format!("unknown rod {}", mv.from)))?;
        let to = self
            .index_of(mv.to)
            .ok_or_else(|| illegal(format!("unknown rod {}", mv.to)))?;
        if from == to {
            return Err(illegal("source and target rod are the same".to_string()));
        }

        match self.stacks[from].last() {
            None => return Err(illegal(format!("rod {} is empty", mv.from))),
            Some(&top) if top != mv.disk => {
                return Err(illegal(format!(
                    "disk {} is on top of rod {}",
                    top, mv.from
                )))
            }
            Some(_) => {}
        }
        if let Some(&top) = self.stacks[to].last() {
            if top < mv.disk {
                return Err(illegal(format!(
                    "disk {} would be placed on smaller disk {}",
                    mv.disk, top
                )));
            }
        }

        let disk = self.stacks[from].pop();
        self.stacks[to].extend(disk);
        Ok(())
    }

    /// True once every disk sits on the destination rod in order.
    pub fn is_solved(&self) -> bool {
        let expected = (1..=self.disks).rev();
        self.stacks[0].is_empty()
            && self.stacks[2].is_empty()
            && self.stacks[1].iter().copied().eq(expected)
    }
}
