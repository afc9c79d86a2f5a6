// Domain modules - business logic per resource

pub mod keyword;
pub mod search;
pub mod website;
