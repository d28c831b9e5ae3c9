#[cfg(test)]
mod common;

#[cfg(test)]
mod index_page_tests;


#[cfg(test)]
mod player_page_tests;

#[cfg(test)]
mod api_tests;

#[cfg(test)]
mod static_asset_tests;

#[cfg(test)]
mod error_page_tests;
