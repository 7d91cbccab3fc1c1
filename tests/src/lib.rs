#[cfg(test)]
mod catalog {
    mod lookup;
    mod scenario;
}

#[cfg(test)]
mod properties;
