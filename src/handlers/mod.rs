// One module per blog resource, all following the pattern in `resource`:
// a single statement per call, fixed confirmation messages, store failures
// normalized to a generic 500. Only `users` consults the access policy.
pub mod categories;
pub mod comments;
pub mod posts;
pub mod resource;
pub mod system;
pub mod users;
