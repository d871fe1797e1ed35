//! Small, hand-computed examples.
mod test;
