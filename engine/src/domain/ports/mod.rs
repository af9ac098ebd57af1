pub mod clock;
pub mod replacement_policy;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::Clock;
pub use replacement_policy::ReplacementPolicy;
