// Resource accessors
//
// Inherent `Client` methods, one file per resource kind. Each builds the
// request path, sends one request, checks the status and runs the body
// through the codec or normalizer.

mod agents;
mod roles;
mod sip_servers;
