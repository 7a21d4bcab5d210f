use anyhow::{anyhow, Result};
use aws_sdk_dynamodb::{operation::create_table::CreateTableOutput, Client};
use tracing::{error, info};

use crate::schema::TableBuilder;

/// DynamoDB client wrapper for issuing compiled create-table requests.
///
/// The schema compiler is pure and never touches the network; this wrapper is
/// the single boundary to the service. It finalizes a [`TableBuilder`] and
/// sends the resulting request, surfacing service errors (table already
/// exists, throughput limits, unavailability) unmodified.
///
/// # Example
///
/// ```no_run
/// use dynamo_schema::client::DynamoDb;
/// use dynamo_schema::schema::{Field, NativeType, TableBuilder, TypeDescription};
///
/// # async fn example() -> anyhow::Result<()> {
/// let sdk_config = aws_config::load_from_env().await;
/// let ddb = DynamoDb::new(&sdk_config);
///
/// let description = TypeDescription::new()
///     .field(Field::new("user_id", NativeType::String).key("hash"));
/// let table = TableBuilder::new("users", &description)?.provision(4, 2)?;
///
/// ddb.create_table_if_not_exists(&table).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DynamoDb {
    client: Client,
}

impl DynamoDb {
    /// Creates a new `DynamoDb` instance.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Verifies authentication by attempting to list tables.
    pub async fn check_auth(&self) -> Result<()> {
        self.client.list_tables().send().await.map_err(|e| {
            error!("Authentication failed: {}", e);
            anyhow!("Authentication failed")
        })?;
        info!("Authentication successful");
        Ok(())
    }

    /// Checks if a table exists.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let tables = self.client.list_tables().send().await?;
        Ok(tables.table_names().contains(&table_name.to_string()))
    }

    /// Finalizes the builder and issues the create-table request.
    ///
    /// Compile errors from finalization are reported before any network call.
    pub async fn create_table(&self, table: &TableBuilder) -> Result<CreateTableOutput> {
        let input = table.input()?;
        let output = self
            .client
            .create_table()
            .set_table_name(input.table_name)
            .set_attribute_definitions(input.attribute_definitions)
            .set_key_schema(input.key_schema)
            .set_global_secondary_indexes(input.global_secondary_indexes)
            .set_local_secondary_indexes(input.local_secondary_indexes)
            .set_provisioned_throughput(input.provisioned_throughput)
            .send()
            .await?;
        info!("Table '{}' created", table.table_name());
        Ok(output)
    }

    /// Creates the table if it doesn't exist.
    pub async fn create_table_if_not_exists(
        &self,
        table: &TableBuilder,
    ) -> Result<Option<CreateTableOutput>> {
        if self.table_exists(table.table_name()).await? {
            info!("Table '{}' exists", table.table_name());
            return Ok(None);
        }
        self.create_table(table).await.map(Some)
    }
}
