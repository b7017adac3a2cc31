/*!

# juniper_aws_appsync_notes

Notes CRUD resolver for an [AWS AppSync][AWS AppSync] GraphQL API, running on the
[AWS Lambda Runtime][AWS Lambda Runtime] as a direct Lambda data source and storing
notes in [DynamoDB][DynamoDB].

AppSync invokes the function once per resolved field. The event names the field
(`info.fieldName`) and carries its arguments; [`NoteResolver`] routes it to the
matching handler and returns the handler's result, or `null` for fields it does
not serve.

| Field         | Type     | Storage call        |
|---------------|----------|---------------------|
| `getNoteById` | Query    | GetItem by `id`     |
| `listNotes`   | Query    | Scan (all pages)    |
| `createNote`  | Mutation | PutItem             |
| `updateNote`  | Mutation | PutItem (overwrite) |
| `deleteNote`  | Mutation | DeleteItem by `id`  |

## Configuration

* `NOTES_TABLE` - name of the DynamoDB table, partition key `id` (string). Required.
* `RUST_LOG` - log filter, defaults to `info`.

## Schema

The GraphQL schema is declared with [Juniper][Juniper] in [`schema`]. Print it with
`cargo run --bin notes-schema`; the checked in `graphql/schema.graphql` is its output.

## Example

```no_run
use juniper_aws_appsync_notes::{Config, DynamoStore, NoteResolver};

# async fn run() -> Result<(), lambda_runtime::Error> {
let config = Config::new("notes");
let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
let store = DynamoStore::new(aws_sdk_dynamodb::Client::new(&aws_config), &config);
lambda_runtime::run(NoteResolver::new(store)).await
# }
```

## License

This project is under the MIT license.

[AWS AppSync]: https://aws.amazon.com/appsync/
[AWS Lambda Runtime]: https://github.com/awslabs/aws-lambda-rust-runtime
[DynamoDB]: https://aws.amazon.com/dynamodb/
[Juniper]: https://github.com/graphql-rust/juniper

*/

pub mod config;
pub mod error;
pub mod event;
pub mod handlers;
pub mod note;
pub mod router;
pub mod schema;
pub mod store;

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::event::{AppSyncEvent, Arguments, Operation};
pub use crate::note::{Note, NoteInput};
pub use crate::router::{resolve, NoteResolver};
pub use crate::store::{DynamoStore, MemoryStore, NoteStore};
