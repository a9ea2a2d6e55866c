mod csrf;
mod table;
