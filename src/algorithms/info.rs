// Descriptions, pseudocode and legends shown in the info pane

use super::Algorithm;
use crate::roles::Role;

const PAIR_LEGEND: &[Role] = &[Role::Normal, Role::Comparing, Role::Swapped, Role::Sorted];
const PIVOT_LEGEND: &[Role] = &[
    Role::Normal,
    Role::Comparing,
    Role::Swapped,
    Role::Pivot,
    Role::Sorted,
];
const PROBE_LEGEND: &[Role] = &[Role::Normal, Role::Current, Role::Found, Role::Path];

/// One-sentence summary of the algorithm
pub fn description(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bubble => "Bubble Sort repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
        Algorithm::Selection => "Selection Sort repeatedly selects the minimum element from the unsorted part and puts it at the beginning.",
        Algorithm::Insertion => "Insertion Sort builds the sorted array one item at a time by inserting elements into their correct position.",
        Algorithm::Merge => "Merge Sort divides the array into halves, sorts them and merges them back together.",
        Algorithm::Quick => "Quick Sort picks a pivot and partitions the array around the pivot, recursively sorting the partitions.",
        Algorithm::Heap => "Heap Sort builds a max heap and repeatedly extracts the maximum element.",
        Algorithm::Gnome => "Gnome Sort moves elements to their correct position by swapping them backward as needed.",
        Algorithm::Pancake => "Pancake Sort repeatedly flips the largest unsorted element to the front, then to its correct position.",
        Algorithm::Comb => "Comb Sort improves on Bubble Sort by comparing elements a shrinking gap apart.",
        Algorithm::OddEven => "Odd-Even Sort is a variation of Bubble Sort that compares odd and even indexed pairs alternately.",
        Algorithm::Shell => "Shell Sort sorts elements far apart from each other and successively reduces the gap.",
        Algorithm::Bitonic => "Bitonic Sort recursively builds and merges bitonic sequences. The length must be a power of two.",
        Algorithm::Bogo => "Bogo Sort shuffles the array until it happens to be sorted. Hopelessly inefficient.",
        Algorithm::Miracle => "Miracle Sort checks whether the array is sorted and waits for a miracle if it is not.",
        Algorithm::Radix => "Radix Sort sorts non-negative integers digit by digit, from the least significant place up.",
        Algorithm::Decide => "Decide Sort is Quick Sort with a randomly chosen pivot.",
        Algorithm::SaltShaker => "Salt Shaker (Cocktail) Sort is a bidirectional Bubble Sort.",
        Algorithm::Linear => "Linear Search checks each element in turn until the target is found.",
        Algorithm::Binary => "Binary Search repeatedly halves a sorted interval to find the target.",
        Algorithm::Jump => "Jump Search checks block ends at fixed intervals, then scans the block that may hold the target.",
        Algorithm::Interpolation => "Interpolation Search estimates the position of the target from the values at both ends of the interval.",
        Algorithm::Exponential => "Exponential Search doubles an index until it passes the target, then binary searches that range.",
        Algorithm::Fibonacci => "Fibonacci Search splits a sorted interval at Fibonacci offsets.",
    }
}

/// Pseudocode listing, one line per source line
pub fn pseudocode(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bubble => "\
for i = 0 to n-1
  for j = 0 to n-i-2
    if arr[j] > arr[j+1]
      swap arr[j], arr[j+1]
  if no swap: break",
        Algorithm::Selection => "\
for i = 0 to n-2
  minIdx = i
  for j = i+1 to n-1
    if arr[j] < arr[minIdx]
      minIdx = j
  swap arr[i], arr[minIdx]",
        Algorithm::Insertion => "\
for i = 1 to n-1
  key = arr[i]
  j = i-1
  while j >= 0 and arr[j] > key
    arr[j+1] = arr[j]
    j--
  arr[j+1] = key",
        Algorithm::Merge => "\
mergeSort(arr, l, r):
  if l < r
    m = (l+r)/2
    mergeSort(arr, l, m)
    mergeSort(arr, m+1, r)
    merge(arr, l, m, r)",
        Algorithm::Quick => "\
quickSort(arr, low, high):
  if low < high
    pi = partition(arr, low, high)
    quickSort(arr, low, pi-1)
    quickSort(arr, pi+1, high)",
        Algorithm::Heap => "\
heapSort(arr):
  build max heap
  for i = n-1 downto 1
    swap arr[0], arr[i]
    heapify(arr, 0, i)",
        Algorithm::Gnome => "\
i = 0
while i < n
  if i == 0 or arr[i] >= arr[i-1]
    i++
  else
    swap arr[i], arr[i-1]
    i--",
        Algorithm::Pancake => "\
for size = n downto 2
  mi = index of max in arr[0..size-1]
  if mi != size-1
    flip arr[0..mi]
    flip arr[0..size-1]",
        Algorithm::Comb => "\
gap = n
while gap > 1 or swapped
  gap = max(1, gap*10/13)
  for i = 0 to n-gap-1
    if arr[i] > arr[i+gap]
      swap arr[i], arr[i+gap]",
        Algorithm::OddEven => "\
sorted = false
while not sorted
  sorted = true
  for i = 1 to n-2 step 2
    if arr[i] > arr[i+1]
      swap arr[i], arr[i+1]; sorted = false
  for i = 0 to n-2 step 2
    if arr[i] > arr[i+1]
      swap arr[i], arr[i+1]; sorted = false",
        Algorithm::Shell => "\
gap = n/2
while gap > 0
  for i = gap to n-1
    temp = arr[i]
    j = i
    while j >= gap and arr[j-gap] > temp
      arr[j] = arr[j-gap]
      j -= gap
    arr[j] = temp
  gap /= 2",
        Algorithm::Bitonic => "\
bitonicSort(arr, low, cnt, dir):
  if cnt > 1
    k = cnt/2
    bitonicSort(arr, low, k, up)
    bitonicSort(arr, low+k, k, down)
    bitonicMerge(arr, low, cnt, dir)",
        Algorithm::Bogo => "\
while not isSorted(arr)
  shuffle(arr)",
        Algorithm::Miracle => "\
while not isSorted(arr)
  wait for a miracle",
        Algorithm::Radix => "\
for exp = 1; max/exp > 0; exp *= 10
  countSort(arr, exp)",
        Algorithm::Decide => "\
decideSort(arr, low, high):
  if low < high
    pi = randomPartition(arr, low, high)
    decideSort(arr, low, pi-1)
    decideSort(arr, pi+1, high)",
        Algorithm::SaltShaker => "\
left = 0, right = n-1, swapped = true
while swapped
  swapped = false
  for i = left to right-1
    if arr[i] > arr[i+1]
      swap arr[i], arr[i+1]; swapped = true
  right--
  for i = right downto left+1
    if arr[i] < arr[i-1]
      swap arr[i], arr[i-1]; swapped = true
  left++",
        Algorithm::Linear => "\
for i = 0 to n-1
  if arr[i] == target
    return i
return -1",
        Algorithm::Binary => "\
left = 0, right = n-1
while left <= right
  mid = (left+right)/2
  if arr[mid] == target
    return mid
  else if arr[mid] < target
    left = mid+1
  else
    right = mid-1
return -1",
        Algorithm::Jump => "\
step = sqrt(n), prev = 0
while arr[min(step, n)-1] < target
  prev = step
  step += sqrt(n)
  if prev >= n
    return -1
for i = prev to min(step, n)-1
  if arr[i] == target
    return i
return -1",
        Algorithm::Interpolation => "\
low = 0, high = n-1
while low <= high and arr[low] <= target <= arr[high]
  pos = low + (high-low)*(target-arr[low])/(arr[high]-arr[low])
  if arr[pos] == target
    return pos
  if arr[pos] < target
    low = pos+1
  else
    high = pos-1
return -1",
        Algorithm::Exponential => "\
if arr[0] == target
  return 0
i = 1
while i < n and arr[i] <= target
  i *= 2
return binarySearch(arr, i/2, min(i, n-1), target)",
        Algorithm::Fibonacci => "\
fib2 = 0, fib1 = 1, fib = fib2 + fib1
while fib < n
  fib2 = fib1; fib1 = fib; fib = fib2 + fib1
offset = -1
while fib > 1
  i = min(offset+fib2, n-1)
  if arr[i] < target
    fib = fib1; fib1 = fib2; fib2 = fib - fib1
    offset = i
  else if arr[i] > target
    fib = fib2; fib1 = fib1 - fib2; fib2 = fib - fib1
  else
    return i
if fib1 and arr[offset+1] == target
  return offset+1
return -1",
    }
}

/// Roles this algorithm's steps can show, in legend order
pub fn legend(algorithm: Algorithm) -> &'static [Role] {
    match algorithm {
        Algorithm::Bubble
        | Algorithm::Heap
        | Algorithm::Gnome
        | Algorithm::Comb
        | Algorithm::OddEven
        | Algorithm::Shell
        | Algorithm::Bitonic
        | Algorithm::SaltShaker => PAIR_LEGEND,
        Algorithm::Selection => &[
            Role::Normal,
            Role::Comparing,
            Role::Minimum,
            Role::Swapped,
            Role::Sorted,
        ],
        Algorithm::Insertion => &[
            Role::Normal,
            Role::Current,
            Role::Comparing,
            Role::Swapped,
            Role::Sorted,
        ],
        Algorithm::Merge => &[Role::Normal, Role::Merging, Role::Sorted],
        Algorithm::Quick | Algorithm::Decide => PIVOT_LEGEND,
        Algorithm::Pancake => &[Role::Normal, Role::Comparing, Role::Flipping, Role::Sorted],
        Algorithm::Bogo => &[Role::Normal, Role::Sorted],
        Algorithm::Miracle => &[Role::Normal, Role::Comparing, Role::Sorted],
        Algorithm::Radix => &[Role::Normal, Role::Digit, Role::Sorted],
        Algorithm::Binary | Algorithm::Jump | Algorithm::Interpolation => &[
            Role::Normal,
            Role::Current,
            Role::Found,
            Role::Path,
            Role::LeftBound,
            Role::RightBound,
        ],
        Algorithm::Linear | Algorithm::Exponential | Algorithm::Fibonacci => PROBE_LEGEND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_has_info() {
        for algorithm in Algorithm::SORTING.iter().chain(Algorithm::SEARCHING.iter()) {
            assert!(!description(*algorithm).is_empty());
            assert!(pseudocode(*algorithm).lines().count() >= 2);
            assert_eq!(legend(*algorithm)[0], Role::Normal);
        }
    }
}
