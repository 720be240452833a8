use crate::{ChainConfig, ForkCondition, Hardfork};

/// An error that occurs when the scheduled forks of a [`ChainConfig`] are not
/// in historical order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ForkOrderError {
    /// A block-keyed fork activates before a fork that precedes it.
    #[error("{later} is scheduled at block {later_block}, before {earlier} at block {earlier_block}")]
    BlockOrder {
        /// The fork that comes first historically.
        earlier: Hardfork,
        /// Activation block of the earlier fork.
        earlier_block: u64,
        /// The fork that comes later historically.
        later: Hardfork,
        /// Activation block of the later fork.
        later_block: u64,
    },
    /// A timestamp-keyed fork activates before a fork that precedes it.
    #[error(
        "{later} is scheduled at timestamp {later_timestamp}, before {earlier} at timestamp {earlier_timestamp}"
    )]
    TimestampOrder {
        /// The fork that comes first historically.
        earlier: Hardfork,
        /// Activation timestamp of the earlier fork.
        earlier_timestamp: u64,
        /// The fork that comes later historically.
        later: Hardfork,
        /// Activation timestamp of the later fork.
        later_timestamp: u64,
    },
}

impl ChainConfig {
    /// Checks that scheduled forks activate in historical order.
    ///
    /// Unscheduled forks are skipped, so a chain may leave optional forks
    /// like the DAO fork unset.
    pub fn check_fork_order(&self) -> Result<(), ForkOrderError> {
        let mut last_block: Option<(Hardfork, u64)> = None;
        let mut last_timestamp: Option<(Hardfork, u64)> = None;

        for (hardfork, condition) in self.fork_activations() {
            match condition {
                ForkCondition::Block(block) => {
                    if let Some((earlier, earlier_block)) =
                        last_block.filter(|(_, earlier_block)| block < *earlier_block)
                    {
                        return Err(ForkOrderError::BlockOrder {
                            earlier,
                            earlier_block,
                            later: hardfork,
                            later_block: block,
                        });
                    }
                    last_block = Some((hardfork, block));
                }
                ForkCondition::Timestamp(timestamp) => {
                    if let Some((earlier, earlier_timestamp)) = last_timestamp
                        .filter(|(_, earlier_timestamp)| timestamp < *earlier_timestamp)
                    {
                        return Err(ForkOrderError::TimestampOrder {
                            earlier,
                            earlier_timestamp,
                            later: hardfork,
                            later_timestamp: timestamp,
                        });
                    }
                    last_timestamp = Some((hardfork, timestamp));
                }
            }
        }

        Ok(())
    }
}
