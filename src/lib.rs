//! A library for proving entailment between propositional clauses by refutation resolution, and for exploring a partially observable cave with the help of such proofs.
//!
//! pacard is made of two parts:
//! - A small resolution prover, which decides whether a set of [clauses](structures::clause) entails a unit goal by deriving the empty clause from the premises together with the negated goal.
//!   The prover uses the *set of support* strategy, where every resolution step involves a clause descended from the negated goal, and removes subsumed clauses as it goes.
//! - An exploration agent which walks a grid world (a *cave*) in search of an exit.
//!   The cave hides a wumpus, teleporters and poison capsules, and the agent only senses whether one of these is adjacent to the cell it stands on.
//!   Before stepping anywhere the agent asks the prover whether the step is safe.
//!
//! # Orientation
//!
//! - The [structures] module contains the value types: [cells](structures::cell), [labels](structures::label), [literals](structures::literal), [clauses](structures::clause) and [beliefs](structures::belief).
//! - The [procedures] module contains the [resolution](procedures::resolution) procedure, the [encoding](procedures::encode) of percepts as clauses, and the [exploration](procedures::explore) policy.
//! - The [world] module contains the interface through which the agent observes a world, and a [cave](world::cave) which implements that interface.
//! - The [config] module contains the options which tune the prover and the agent.
//!
//! # Examples
//!
//! + A chain of implications.
//!
//! ```rust
//! # use pacard::config::Config;
//! # use pacard::procedures::resolution::Resolver;
//! # use pacard::structures::{cell::Cell, clause::Clause, label::Label, literal::Literal};
//! # use std::collections::BTreeSet;
//! let here = Cell::new(0, 0);
//! let a = Literal::new(Label::Wumpus, here, false);
//! let b = Literal::new(Label::WumpusStench, here, false);
//! let c = Literal::new(Label::Safe, here, false);
//!
//! let premises = BTreeSet::from([
//!     Clause::from(vec![a.negate(), b]),
//!     Clause::from(vec![b.negate(), c]),
//!     Clause::from(a),
//! ]);
//!
//! let resolver = Resolver::new(&Config::default());
//! assert_eq!(resolver.resolve(&premises, &Clause::from(c)), Ok(true));
//! assert_eq!(resolver.resolve(&premises, &Clause::from(c.negate())), Ok(false));
//! ```
//!
//! + Explore a small cave.
//!
//! ```rust
//! # use pacard::config::Config;
//! # use pacard::procedures::explore::Explorer;
//! # use pacard::world::cave::Cave;
//! let cave: Cave = "%%%%%\n%P  E%\n%%%%%".parse().unwrap();
//!
//! let exploration = Explorer::new(&cave, Config::default()).explore().unwrap();
//! assert_eq!(exploration.visited.len(), 4);
//! assert_eq!(exploration.actions.len(), 3);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) the decisions of the agent can be followed with `RUST_LOG=exploration …`, and every resolvent with `RUST_LOG=resolution=trace …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod db;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
pub mod world;

pub mod generic;
pub mod misc;
