mod helpers;
mod links;
mod static_files;
