pub mod arithmetic;
pub mod pure;
pub mod statistics;
