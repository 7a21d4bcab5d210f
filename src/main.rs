use anyhow::Result;
use dynamo_schema::client::DynamoDb;
use dynamo_schema::logging;
use dynamo_schema::schema::{Field, NativeType, ProjectionSpec, TableBuilder, TypeDescription};
use tracing::info;

const TABLE_NAME: &str = "user-actions";

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;
    dotenv::dotenv().ok();

    let sdk_config = aws_config::load_from_env().await;

    let ddb = DynamoDb::new(&sdk_config);

    ddb.check_auth().await?;

    let description = TypeDescription::new()
        .field(Field::new("ID", NativeType::String).key("hash"))
        .field(Field::new("Time", NativeType::Timestamp).key("range"))
        .field(Field::new("Seq", NativeType::Integer).index("Seq-ID-index,hash"))
        .field(Field::new("UUID", NativeType::String).index("Seq-ID-index,range"));

    let table = TableBuilder::new(TABLE_NAME, &description)?
        .project("Seq-ID-index", ProjectionSpec::KeysOnly)?
        .provision(4, 2)?
        .provision_index("Seq-ID-index", 1, 2)?;

    match ddb.create_table_if_not_exists(&table).await {
        Ok(Some(output)) => {
            if let Some(description) = output.table_description() {
                info!("Table status: {:?}", description.table_status());
                info!("Table name: {:?}", description.table_name());
            } else {
                info!("Table created, but description is not available");
            }
        }
        Ok(None) => info!("Table '{TABLE_NAME}' already exists, nothing to do"),
        Err(e) => info!("Error creating table: {}", e),
    }

    Ok(())
}
