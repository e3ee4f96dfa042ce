// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Initialize the logger with the specified verbosity level
///
/// # Arguments
/// * `verbose` - Verbosity level (0=warn, 1=info, 2=debug, 3+=trace)
pub fn setup_logger(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(filter_for(verbose));

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

/// Default `RUST_LOG`-style filter for a verbosity level
///
/// Verbosity only applies to taglog's own diagnostics. Messages routed
/// through the log surface have already passed the logger's threshold and
/// are always let through.
pub fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "taglog=warn,taglog::out=trace",
        1 => "taglog=info,taglog::out=trace",
        2 => "taglog=debug,taglog::out=trace",
        _ => "taglog=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for(0), "taglog=warn,taglog::out=trace");
        assert_eq!(filter_for(1), "taglog=info,taglog::out=trace");
        assert_eq!(filter_for(2), "taglog=debug,taglog::out=trace");
        assert_eq!(filter_for(3), "taglog=trace");
        assert_eq!(filter_for(9), "taglog=trace");
    }

    #[test]
    fn test_surface_target_always_passes() {
        use crate::surface::facade::DEFAULT_TARGET;

        for verbose in 0..=3 {
            let filter = env_logger::filter::Builder::new()
                .parse(filter_for(verbose))
                .build();
            let record = log::Metadata::builder()
                .level(log::Level::Trace)
                .target(DEFAULT_TARGET)
                .build();
            assert!(filter.enabled(&record), "verbosity {verbose}");
        }

        let quiet = env_logger::filter::Builder::new()
            .parse(filter_for(0))
            .build();
        let diagnostic = log::Metadata::builder()
            .level(log::Level::Debug)
            .target("taglog::config")
            .build();
        assert!(!quiet.enabled(&diagnostic));
    }
}
