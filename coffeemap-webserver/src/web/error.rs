use rocket::{
    http::Status,
    response::{self, Responder},
    Request,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The map has not been rendered yet")]
    MapNotFound,
    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::MapNotFound,
            _ => Self::Io(err),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'o> {
        match self {
            Self::MapNotFound => {
                warn!("{self}");
                Err(Status::NotFound)
            }
            Self::Io(err) => {
                error!("Unable to read map: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
