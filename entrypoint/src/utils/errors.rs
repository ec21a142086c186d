use crawler::errors::CrawlerError;
use csv_connector::errors::ConnectorError;
use retailers::errors::RetailerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error(transparent)]
    Crawler(#[from] CrawlerError),
    #[error(transparent)]
    Retailer(#[from] RetailerError),
    #[error(transparent)]
    Connector(#[from] ConnectorError),
    #[error("No product urls were collected, nutrition collection cancelled")]
    NoProductUrls,
}
