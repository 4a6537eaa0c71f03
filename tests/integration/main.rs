mod helpers;

mod cli;
mod post_generation;
mod project_name;
