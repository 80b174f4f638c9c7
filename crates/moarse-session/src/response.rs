use super::types::KeyResponse;
use super::EditSession;

impl EditSession {
    /// Redraw both views from the buffer.
    pub(super) fn make_full_redraw_response(&self) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        resp.code = Some(self.buffer.rendered());
        resp.translation = Some(self.buffer.current_text());
        resp
    }

    /// Redraw only the code view; the text view holds what the user typed.
    pub(super) fn make_code_redraw_response(&self) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        resp.code = Some(self.buffer.rendered());
        resp
    }
}
