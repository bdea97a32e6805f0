use std::sync::Mutex;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::oneshot;
use url::Url;

use crate::fetcher::{HttpClient, HttpClientResult, HttpResponse, TransportError};

type Pending = (Url, Option<oneshot::Sender<HttpClientResult>>);

/// Records every request and leaves it pending until the test completes it.
#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<Pending>>,
}

impl HttpClientSpy {
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn complete_with_error(&self, message: &str, index: usize) {
        self.complete(index, Err(TransportError(message.to_string())));
    }

    pub fn complete_with_status(&self, status: u16, body: Vec<u8>, index: usize) {
        self.complete(index, Ok(HttpResponse::new(status, body)));
    }

    fn complete(&self, index: usize, result: HttpClientResult) {
        let sender = self.messages.lock().unwrap()[index]
            .1
            .take()
            .expect("request already completed");
        // The receiving side may be gone if nobody awaits the request anymore.
        let _ = sender.send(result);
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url) -> BoxFuture<'static, HttpClientResult> {
        let (tx, rx) = oneshot::channel();
        self.messages.lock().unwrap().push((url.clone(), Some(tx)));

        async move {
            rx.await
                .unwrap_or_else(|_| Err(TransportError("request abandoned".into())))
        }
        .boxed()
    }
}
