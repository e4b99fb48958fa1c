use anyhow::Result;
use mongodb::{Client, Collection, Database};

/// Database the service uses when the connection URI names none
const DEFAULT_DATABASE: &str = "users";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Build the client from a connection URI. Construction only: no
    /// commands are issued against the server here.
    pub async fn new(uri: &str) -> Result<Self> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Timeouts otimizados
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        let db_name = database_name(uri);
        let db = client.database(db_name);

        log::info!("MongoDB client ready for database: {}", db_name);

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Extract the database name from the URI path, e.g.
/// `mongodb://host:27017/mydb?opts` -> `mydb`
fn database_name(uri: &str) -> &str {
    uri.splitn(4, '/')
        .nth(3)
        .and_then(|s| s.split('?').next())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DATABASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_name_from_uri_path() {
        assert_eq!(database_name("mongodb://localhost:27017/mydb"), "mydb");
        assert_eq!(
            database_name("mongodb://localhost:27017/mydb?retryWrites=true"),
            "mydb"
        );
    }

    #[test]
    fn test_database_name_defaults_without_path() {
        assert_eq!(database_name("mongodb://localhost:27017"), "users");
        assert_eq!(database_name("mongodb://localhost:27017/"), "users");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::from_path(crate::config::ENV_FILE).ok();

        let settings = crate::config::Settings::from_env().unwrap();
        let db = MongoDB::new(&settings.mongo_url).await;
        assert!(db.is_ok());
    }
}
