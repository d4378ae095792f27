mod boundary;
mod search;
