pub mod classify_domain;
