use snafu::Snafu;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)))]
pub enum Sm2Error {
    #[snafu(display("failed to load items: {source}"))]
    LoadItems { source: std::io::Error },
    #[snafu(display("failed to save items: {source}"))]
    SaveItems { source: std::io::Error },
    #[snafu(display("malformed item collection: {source}"))]
    MalformedCollection { source: serde_json::Error },
}

pub type Result<T, E = Sm2Error> = std::result::Result<T, E>;
