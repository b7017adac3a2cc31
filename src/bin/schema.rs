//! Prints the GraphQL schema served by `notes-resolver`.
//!
//! `cargo run --bin notes-schema > graphql/schema.graphql`

fn main() {
    print!("{}", juniper_aws_appsync_notes::schema::schema().as_sdl());
}
