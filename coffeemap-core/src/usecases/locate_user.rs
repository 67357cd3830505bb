use super::prelude::*;

pub fn locate_user<G>(gateway: &G, address: &str) -> Result<UserLocation>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::EmptyAddress);
    }
    let pos = gateway.resolve_address(address)?;
    log::info!("Resolved '{address}' to {pos}");
    Ok(UserLocation {
        address: address.to_owned(),
        pos,
    })
}
