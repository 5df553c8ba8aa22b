/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Request;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{request} has a floor outside 1..={n_floors}")]
    OutOfRange { request: Request, n_floors: u8 },
    #[error("controller is no longer accepting requests")]
    Disconnected,
}

/**
 * Producer side of the inbound request channel.
 *
 * Cheap to clone; every traffic source holds its own copy. `submit` blocks while a
 * bounded channel is full and never waits on the controller otherwise.
 */
#[derive(Debug, Clone)]
pub struct RequestSubmitter {
    request_tx: cbc::Sender<Request>,
    n_floors: u8,
}

impl RequestSubmitter {
    pub fn new(request_tx: cbc::Sender<Request>, n_floors: u8) -> RequestSubmitter {
        RequestSubmitter {
            request_tx,
            n_floors,
        }
    }

    pub fn submit(&self, request: Request) -> Result<(), SubmitError> {
        if !request.is_within(self.n_floors) {
            return Err(SubmitError::OutOfRange {
                request,
                n_floors: self.n_floors,
            });
        }
        self.request_tx
            .send(request)
            .map_err(|_| SubmitError::Disconnected)
    }
}

/// Creates the inbound request channel. A capacity of 0 means unbounded.
pub fn request_channel(capacity: usize) -> (cbc::Sender<Request>, cbc::Receiver<Request>) {
    if capacity == 0 {
        cbc::unbounded()
    } else {
        cbc::bounded(capacity)
    }
}
