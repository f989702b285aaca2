//! TypeScript bindings for the devconf-ui core are generated by this crate's
//! build script into `generated/typescript`.
