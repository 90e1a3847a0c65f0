// Library root
// -----------
// The binary (`main.rs`) wires these modules into one submission run.
//
// Module responsibilities:
// - `config`: injected assignment key and part list, validated at start.
// - `startup`: checks that the program runs from the project directory.
// - `prompt`: asks for the login email and submission token.
// - `artifact`: reads the per-part debug logs.
// - `payload`: builds the JSON body from configuration, credentials and logs.
// - `transport`: posts the body to the grader and classifies the response.
// - `ui`: runs a session and prints its outcome.
pub mod artifact;
pub mod config;
pub mod payload;
pub mod prompt;
pub mod startup;
pub mod transport;
pub mod ui;
