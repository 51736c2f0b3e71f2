mod health;
mod helpers;
mod remote;
mod round;
