/*!
Configuration of the prover and the agent.

A single [Config] is given to an [explorer](crate::procedures::explore::Explorer), which in turn configures the [resolver](crate::procedures::resolution::Resolver) used for each query.
Each option is a [ConfigOption], which records the name and bounds of the option alongside the value.

```rust
# use pacard::config::Config;
let mut config = Config::default();

assert_eq!(config.risk_threshold.value, 2);
assert!(config.risk_threshold.set(3));
assert!(!config.risk_threshold.set(9));
assert_eq!(config.risk_threshold.value, 3);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// A count of successors.
pub type SuccessorCount = usize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Remove clauses subsumed by some other clause at each iteration of a resolution.
    pub subsumption: ConfigOption<bool>,

    /// Discard resolvents which contain some literal together with its negation.
    pub tautology_deletion: ConfigOption<bool>,

    /// Permit the agent to enter a cell which is not known to be safe, when no safe cell remains.
    pub forced_risk: ConfigOption<bool>,

    /// A risk is only taken from a cell with strictly more successors than the threshold.
    pub risk_threshold: ConfigOption<SuccessorCount>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            subsumption: ConfigOption {
                name: "subsumption",
                min: false,
                max: true,
                value: true,
            },

            tautology_deletion: ConfigOption {
                name: "tautology_deletion",
                min: false,
                max: true,
                value: true,
            },

            forced_risk: ConfigOption {
                name: "forced_risk",
                min: false,
                max: true,
                value: true,
            },

            risk_threshold: ConfigOption {
                name: "risk_threshold",
                min: 0,
                max: 4,
                value: 2,
            },
        }
    }
}
