use derive_more::IntoIterator;
use rand_distr::{Distribution, Uniform};

use crate::{
    error::{DiceError, Result},
    roller::Roller,
};

pub const SIX_SIDED: u32 = 6;

#[derive(Debug, Clone)]
pub struct Die {
    sides: u32,
    value: u32,
    faces: Uniform<u32>,
}

impl Die {
    /// Creates an unrolled die showing 1.
    pub fn new(sides: u32) -> Result<Self> {
        let invalid = DiceError::InvalidConfiguration {
            reason: "Dice must have at least one side",
        };
        if sides == 0 {
            return Err(invalid);
        }
        let faces = Uniform::new_inclusive(1, sides).map_err(|_| invalid)?;
        Ok(Self {
            sides,
            value: 1,
            faces,
        })
    }

    pub fn roll(&mut self, rng: &mut Roller) {
        self.value = self.faces.sample(rng.rng());
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

/// The faces produced by one `DiceSet::roll_all`, in dice order.
#[derive(Debug, Clone, PartialEq, Eq, IntoIterator)]
pub struct RollOutcome {
    pub roll_number: u64,
    #[into_iterator(owned, ref)]
    pub faces: Vec<u32>,
}

impl RollOutcome {
    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(f, "Results: ")?;
        for face in &self.faces {
            write!(f, "[{face}] ")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct DiceSet {
    dice: Vec<Die>,
    total_rolls: u64,
}

impl DiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every die with `quantity` fresh six-sided dice.
    /// The roll counter is kept.
    pub fn configure(&mut self, quantity: i64) -> Result<()> {
        let quantity = usize::try_from(quantity)
            .ok()
            .filter(|&q| q > 0)
            .ok_or(DiceError::InvalidConfiguration {
                reason: "You need at least one dice",
            })?;

        self.dice = (0..quantity)
            .map(|_| Die::new(SIX_SIDED))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Prepared {quantity} dice");
        Ok(())
    }

    pub fn roll_all(&mut self, rng: &mut Roller) -> RollOutcome {
        self.total_rolls += 1;
        let faces = self
            .dice
            .iter_mut()
            .map(|die| {
                die.roll(rng);
                die.value()
            })
            .collect::<Vec<_>>();
        log::debug!("Roll #{}: {:?}", self.total_rolls, faces);
        RollOutcome {
            roll_number: self.total_rolls,
            faces,
        }
    }

    pub fn roll_count(&self) -> u64 {
        self.total_rolls
    }

    pub fn reset_count(&mut self) {
        self.total_rolls = 0;
    }

    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }
}
