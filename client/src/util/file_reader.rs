//! Read a user-chosen file into a data URL.
//!
//! Wraps the callback-based `FileReader` in a future: `onload`/`onerror`
//! resolve a oneshot channel that the caller awaits inside `spawn_local`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("FileReader unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read file: {0}")]
    Failed(String),
    #[error("file read produced no data URL")]
    NoData,
    #[error("file read was abandoned")]
    Cancelled,
}

#[cfg(feature = "csr")]
pub async fn read_as_data_url(file: &web_sys::Blob) -> Result<String, FileReadError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    type Reply = Rc<RefCell<Option<oneshot::Sender<Result<String, FileReadError>>>>>;

    fn reply(tx: &Reply, result: Result<String, FileReadError>) {
        if let Some(tx) = tx.borrow_mut().take() {
            if tx.send(result).is_err() {
                log::debug!("file read finished after its reader was dropped");
            }
        }
    }

    let reader = web_sys::FileReader::new().map_err(|e| FileReadError::Unavailable(format!("{e:?}")))?;
    let (tx, rx) = oneshot::channel();
    let tx: Reply = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = Rc::clone(&tx);
        Closure::wrap(Box::new(move |_ev: web_sys::ProgressEvent| {
            let result = match reader.result() {
                Ok(value) => value.as_string().ok_or(FileReadError::NoData),
                Err(e) => Err(FileReadError::Failed(format!("{e:?}"))),
            };
            reply(&tx, result);
        }) as Box<dyn FnMut(web_sys::ProgressEvent)>)
    };
    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::wrap(Box::new(move |_ev: web_sys::ProgressEvent| {
            reply(&tx, Err(FileReadError::Failed("reader reported an error".to_owned())));
        }) as Box<dyn FnMut(web_sys::ProgressEvent)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(file).map_err(|e| FileReadError::Failed(format!("{e:?}")))?;

    let result = rx.await.unwrap_or(Err(FileReadError::Cancelled));
    reader.set_onload(None);
    reader.set_onerror(None);
    drop((onload, onerror));
    result
}
