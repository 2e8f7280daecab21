mod salary;
mod user;
