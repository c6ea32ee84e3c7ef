pub use self::driver::Driver;
pub use self::roster::Roster;

mod driver;
mod roster;
mod teams;
