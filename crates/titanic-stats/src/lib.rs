//! Statistical primitives for the Titanic dashboard.
//!
//! This crate provides the small set of numeric tools the dashboard panels
//! are built on:
//!
//! - **Descriptive statistics**: mean, median and sample standard deviation
//! - **Histogram generation**: equal-width binning over the data range
//! - **Kernel density estimation**: Gaussian KDE with Scott's bandwidth rule
//! - **Correlation**: Pearson correlation over pairwise-complete observations
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`kde`]: Smooth density curves to overlay on histograms
//! - [`correlation`]: Pearson coefficients and correlation matrices
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use titanic_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use titanic_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::uniform(values, 5);
//! assert_eq!(histogram.bins.len(), 5);
//! assert_eq!(histogram.total_count(), 10);
//! ```
//!
//! ## Correlating two columns with missing values
//!
//! ```
//! use titanic_stats::correlation::pearson_pairwise;
//!
//! let xs = [Some(1.0), Some(2.0), None, Some(4.0)];
//! let ys = [Some(2.0), Some(4.0), Some(5.0), Some(8.0)];
//! let r = pearson_pairwise(&xs, &ys).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod kde;
