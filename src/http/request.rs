//! Host adapter: hyper request to inspector request

use hyper::Request;

use crate::inspector::InspectedRequest;

impl InspectedRequest {
    /// Build the inspector's view of a hyper request.
    ///
    /// The url keeps the query string. Header names come out of hyper already
    /// lowercase; values that are not valid UTF-8 are converted lossily.
    /// For repeated headers the first value wins.
    pub fn from_hyper<B>(req: &Request<B>) -> Self {
        let url = req
            .uri()
            .path_and_query()
            .map_or_else(|| "/".to_string(), |pq| pq.as_str().to_string());

        req.headers().iter().fold(Self::new(url), |acc, (name, value)| {
            acc.with_header(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
    }
}
