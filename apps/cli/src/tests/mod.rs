mod cli;
mod commands;
mod logger;
