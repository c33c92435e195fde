//! Viewer identity middleware.
//!
//! Authentication happens upstream; a gateway forwards the signed-in user as
//! `X-User-Id`. Guests are told apart by session and client address.

use salvo::prelude::*;
use storefront_app::domain::{engagement::identity::ViewerIdentity, users::UserUuid};

use crate::extensions::*;

pub(crate) const USER_ID_HEADER: &str = "x-user-id";
pub(crate) const SESSION_ID_HEADER: &str = "x-session-id";
pub(crate) const SESSION_COOKIE: &str = "sessionId";

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
const UNKNOWN_ADDRESS: &str = "unknown";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    match resolve(req) {
        Ok(identity) => {
            depot.insert_viewer(identity);

            ctrl.call_next(req, depot, res).await;
        }
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();
        }
    }
}

fn resolve(req: &Request) -> Result<ViewerIdentity, StatusError> {
    let user = non_empty_header(req, USER_ID_HEADER)
        .map(str::parse::<UserUuid>)
        .transpose()
        .or_400("invalid X-User-Id header")?;

    let session_id = req
        .cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().trim())
        .filter(|value| !value.is_empty())
        .or_else(|| non_empty_header(req, SESSION_ID_HEADER))
        .map(str::to_owned);

    Ok(ViewerIdentity {
        user,
        session_id,
        ip_address: client_address(req),
    })
}

fn non_empty_header<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// First `X-Forwarded-For` hop, else the socket peer.
fn client_address(req: &Request) -> String {
    if let Some(forwarded) = non_empty_header(req, FORWARDED_FOR_HEADER)
        && let Some(first) = forwarded.split(',').map(str::trim).find(|hop| !hop.is_empty())
    {
        return first.to_owned();
    }

    let peer = req.remote_addr();

    peer.as_ipv4()
        .map(|addr| addr.ip().to_string())
        .or_else(|| peer.as_ipv6().map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| UNKNOWN_ADDRESS.to_owned())
}
