//! VSOP87C series for Saturn: heliocentric X, Y, Z on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [9.52312533591, 0.87401491487, 213.5429129215],
    [0.79501390398, 4.76580713096, 0.2438174835],
    [0.26427074351, 0.12339999915, 426.8420083595],
    [0.06836881382, 4.14537914189, 206.42936592071],
    [0.06628914946, 0.75057317755, 220.6564599223],
    [0.02340967916, 2.01979283929, 7.3573644843],
    [0.01250581159, 2.17392657526, 110.45013870291],
    [0.01141539711, 3.03345312296, 419.72846135871],
    [0.01098217124, 5.65720860592, 640.1411037975],
    [0.00773784455, 3.50285419449, 213.0552779545],
    [0.00708587042, 2.70922969272, 316.6356871401],
    [0.0043422703, 0.71624098563, 529.9347825781],
    [0.0037311088, 0.00103492669, 433.9555553603],
    [0.00413446294, 5.12392705512, 102.84895673509],
    [0.00169743473, 6.19449424436, 205.9417309537],
    [0.00122184772, 4.36825124039, 103.3365917021],
    [0.00141571884, 4.84926431365, 419.2408263917],
    [0.00097840616, 1.0154556951, 323.74923414091],
    [0.00080586098, 5.62239507032, 11.2895177474],
    [0.00083840998, 0.62002007163, 227.77000692311],
    [0.0007249912, 2.42001514073, 633.0275567967],
    [0.00070188882, 0.88664463373, 209.6107596584],
    [0.00068920772, 4.01663904384, 217.4750661846],
    [0.00065633219, 2.76404999091, 202.4972126576],
    [0.00058340081, 2.16106790491, 224.5886131854],
    [0.00054036331, 4.90882849644, 853.4401992355],
    [0.00045670301, 1.87822014512, 14.47091148511],
    [0.00039957906, 4.29286414022, 199.3158189199],
    [0.00044623718, 5.61332771211, 63.49208081989],
    [0.00025182378, 0.37762569174, 216.72430665921],
    [0.00024597547, 4.52837189964, 210.36151918381],
    [0.00024755958, 5.60048517853, 415.7963080956],
    [0.00025518626, 1.6381402686, 117.5636857037],
    [0.00030420785, 4.58036001246, 735.6326960483],
    [0.00022261024, 5.81339199632, 522.3336006103],
    [0.00023384603, 5.53454487341, 647.25465079831],
    [0.0001992186, 2.52438740442, 426.3543733925],
    [0.0002336808, 0.18801837763, 149.8070146181],
    [0.00024816783, 5.50044242809, 75.0254160508],
    [0.0001505773, 4.67637379107, 277.2788112249],
    [0.00013291291, 0.78826176081, 309.0345051723],
    [0.00012028365, 1.02934559031, 1059.6257476727],
    [0.00012408238, 4.19692495275, 490.5779066629],
    [0.0001203726, 5.66358935866, 352.06040979221],
    [0.00007880259, 2.60324364809, 743.23387801611],
    [0.00007428823, 4.26427762571, 6.86972951729],
    [0.00006985779, 3.88380796193, 309.5221401393],
    [0.00009059376, 4.31626349433, 1052.02456570489],
    [0.0000662618, 5.53666910204, 838.72547026689],
    [0.00008285289, 2.0302886501, 95.7354097343],
    [0.000079086, 2.91633632242, 316.14805217309],
    [0.00006284835, 1.10258326823, 3.6883357796],
    [0.00006078527, 6.1587188541, 441.06910236111],
    [0.00005628724, 2.47826941808, 846.3266522347],
    [0.00005274108, 3.40288166935, 220.16882495529],
    [0.00005584926, 3.11230524128, 412.6149143579],
    [0.00004423799, 0.00561711784, 198.82818395289],
    [0.00004849319, 0.26891980614, 537.0483295789],
    [0.00004179381, 0.45517914787, 4.1759707466],
    [0.00005772348, 5.30786967696, 38.3768531213],
    [0.00005198014, 4.5457344327, 211.09523236671],
    [0.00005154525, 0.34613786659, 215.99059347631],
    [0.00003792407, 5.99326135433, 422.9098550964],
    [0.00004380719, 1.15696233721, 202.0095776906],
    [0.00004838174, 2.03403080585, 109.9625037359],
    [0.00003765792, 3.7207336909, 212.579705075],
    [0.00003749721, 1.16925812858, 214.506120768],
    [0.00003116757, 0.84596173223, 213.4947288117],
    [0.00003115849, 4.04374864852, 213.5910970313],
    [0.00003119049, 0.50950816465, 625.42637482889],
    [0.00003235633, 1.36565416054, 632.5399218297],
    [0.00004077069, 5.95933511847, 136.78920667889],
    [0.00003290391, 0.32712024501, 522.8212355773],
    [0.00002828736, 0.73223929578, 330.8627811417],
    [0.00003365297, 1.42074759163, 437.8877086234],
    [0.00002888976, 1.14066267703, 86.07111631471],
    [0.00002748221, 5.42931189203, 138.76131435421],
    [0.00002742545, 0.93548005709, 203.9816853659],
    [0.00002636395, 5.40701545041, 288.32451148881],
    [0.00003170535, 5.76636557141, 76.50988875911],
    [0.0000253006, 5.09730517007, 629.0954035336],
    [0.00002985976, 4.15644325876, 1066.7392946735],
    [0.00002617358, 5.45160906944, 127.22797912329],
    [0.00002504577, 1.49069183275, 9.8050450391],
    [0.00002459199, 5.26431553671, 1155.1173399235],
    [0.00002429561, 3.97256605696, 223.1041404771],
    [0.00003133467, 4.05731806661, 1368.4164353615],
    [0.00002289072, 3.68644263049, 430.7741616226],
    [0.00002651422, 5.01550706453, 412.12727939089],
    [0.00002791618, 1.7610497867, 3.42521122121],
    [0.00002086473, 3.54266754065, 423.66061462181],
    [0.00002337517, 5.86744835115, 388.70897272171],
    [0.00001735774, 5.67596672079, 736.1203310153],
    [0.0000161776, 4.44174561688, 96.2230447013],
    [0.0000163542, 4.54438827357, 12.77399045571],
    [0.00001637578, 2.19935832842, 213.0216480597],
    [0.00001633497, 2.69143754521, 214.0641777833],
    [0.00001703439, 2.42595077461, 529.44714761109],
    [0.00001499174, 3.5997714541, 52.446380556],
    [0.00001462063, 5.92411007321, 430.02340209721],
    [0.0000197585, 2.02313657577, 1.7282901918],
    [0.00001422179, 4.89979449865, 625.9140097959],
    [0.00001539334, 4.78536735793, 860.55374623631],
    [0.00001400317, 3.722568034, 341.01470952831],
    [0.00001337694, 6.25839826307, 948.9317914863],
    [0.00001427589, 5.41396429448, 350.5759370839],
    [0.00001149795, 0.2040471412, 941.8182444855],
    [0.0000111216, 0.47891380184, 234.8835539239],
    [0.00001015231, 4.99599119065, 1471.50920958009],
    [0.00001090238, 5.82704347671, 363.1061100561],
    [0.0000109146, 1.13704115272, 174.1860370063],
    [0.0000115232, 3.83459893564, 201.01273994931],
    [0.00000874317, 5.9598853286, 515.2200536095],
    [0.00001180011, 3.80422455282, 1684.80830501809],
    [0.00001058128, 1.29841878389, 742.74624304909],
    [0.00000850822, 4.55296025129, 949.4194264533],
    [0.00000869178, 3.23528200552, 210.6221516147],
    [0.00001119594, 3.46591203463, 703.8770021009],
    [0.00000868384, 1.65138396031, 216.4636742283],
    [0.00000830815, 0.58110190109, 212.79215339611],
    [0.00000825441, 4.30721839854, 214.2936724469],
    [0.00000881196, 1.46906794476, 209.35012722751],
    [0.00000866345, 3.41432821062, 217.73569861551],
    [0.00000789515, 0.23961241737, 223.83785366],
    [0.00001091862, 2.67346837599, 340.52707456129],
    [0.00001008329, 1.08917861648, 226.07308589371],
    [0.00000919088, 4.86163770046, 565.35950523021],
    [0.00000820108, 2.19486077696, 88.6218627335],
    [0.00000716162, 5.81233216238, 1265.32366114289],
    [0.00000860928, 3.70614582002, 252.8997888367],
    [0.00000710939, 3.41349088844, 417.2807808039],
    [0.00000701898, 1.91952059017, 956.53297345411],
    [0.0000091863, 4.57690637056, 563.87503252191],
    [0.00000711475, 0.90576159835, 207.913838629],
    [0.00000797153, 2.01469397505, 208.1262869501],
    [0.00000758732, 4.77442040057, 728.5191490475],
    [0.00000642018, 1.92693340665, 639.6534688305],
    [0.00000769629, 2.89427987517, 218.9595388929],
    [0.00000811029, 6.22246903964, 1162.7185218913],
    [0.00000692909, 3.97674040211, 219.171987214],
    [0.00000798757, 1.35424808982, 22.3352180113],
    [0.00000834309, 2.96244339722, 160.852714882],
    [0.00000655277, 0.92079690947, 301.9209581715],
    [0.00000762632, 1.72094446975, 21.5844584859],
    [0.00000576036, 3.10166158268, 99.40443843901],
    [0.00000615654, 2.27550746905, 845.8390172677],
    [0.00000578589, 0.80405181178, 265.745475994],
    [0.00000626782, 2.79771540666, 18.40306474821],
    [0.00000589499, 3.90740268282, 554.31380496631],
    [0.00000700182, 0.40018815531, 62.0076081116],
    [0.00000697691, 0.57105547911, 124.6772327045],
    [0.00000613843, 4.42239495907, 218.2087793675],
    [0.00000581263, 2.07871172739, 231.70216018621],
    [0.00000666749, 2.82369459311, 425.35753565121],
    [0.00000516903, 0.3885720341, 414.31183538731],
    [0.00000499031, 2.54039255853, 408.68276109481],
    [0.00000502357, 6.19770250859, 1258.21011414209],
    [0.00000531983, 2.53130210328, 215.0273856298],
    [0.00000643415, 1.39270825866, 64.97655352819],
    [0.00000518385, 2.70002198759, 142.6934676173],
    [0.00000550972, 0.47047442681, 208.8770464755],
    [0.00000469313, 0.32930418795, 71.09326278771],
    [0.00000456002, 4.67119057391, 203.247972183],
    [0.00000592362, 1.86789317281, 266.233110961],
    [0.00000465459, 5.40811702089, 654.3681977991],
    [0.00000444956, 4.7319225122, 1787.9010792367],
    [0.00000502683, 4.37046140723, 251.6759485593],
    [0.00000522764, 2.19701769819, 212.05844021321],
    [0.00000422458, 2.13565038243, 479.532206399],
    [0.00000437134, 1.3283652472, 1589.3167127673],
    [0.00000414039, 3.63548652605, 148.32254190981],
    [0.00000398994, 1.64973433253, 213.6547875061],
    [0.00000398994, 3.23989183406, 213.4310383369],
    [0.00000373088, 5.4601058409, 1581.7155307995],
    [0.00000469097, 3.55737355039, 2001.2001746747],
    [0.00000361258, 4.90274855427, 302.40859313851],
    [0.0000034592, 5.0128673148, 198.5650593945],
    [0.00000350777, 5.86079095869, 98.6561710411],
    [0.00000335274, 1.03009229022, 213.7553612426],
    [0.00000335274, 3.85953387637, 213.3304646004],
    [0.00000367346, 5.91088479684, 750.3474250169],
    [0.00000369973, 5.3993307048, 151.2914873264],
    [0.0000039923, 1.04833113678, 1059.1381127057],
    [0.00000318144, 6.1503538662, 228.5207664485],
    [0.00000315586, 5.6872453346, 831.6119232661],
    [0.00000337834, 0.6679808653, 175.40987728371],
    [0.00000313433, 3.54547785742, 2.20386307129],
    [0.0000033004, 1.3803834945, 276.79117625789],
    [0.00000383783, 2.57160924287, 56.3785338191],
    [0.00000350135, 4.7597544817, 114.38229196601],
    [0.00000401239, 4.28930925743, 178.11819026941],
    [0.00000404631, 6.03696917524, 1479.11039154791],
    [0.00000404539, 1.52309497166, 311.9552664791],
    [0.00000304876, 6.11535489175, 195.38366565681],
    [0.00000289344, 4.48279316993, 192.2022719191],
    [0.0000027025, 5.1403523665, 636.2089505344],
    [0.00000271661, 1.28934639885, 278.76328393321],
    [0.00000283573, 0.04390160982, 191.45151239371],
    [0.00000294112, 1.97767959737, 1162.23088692429],
    [0.00000266932, 5.654933468, 205.46615807421],
    [0.00000269475, 2.14597987484, 327.68138740401],
    [0.00000348053, 0.61890667474, 248.9676355736],
    [0.00000296599, 1.51525625285, 10.538758222],
    [0.00000252084, 1.67555502838, 213.80354535241],
    [0.00000252084, 3.21407113821, 213.28228049061],
    [0.00000250282, 2.61655820302, 433.46792039329],
    [0.00000294321, 2.01870159642, 106.5179854398],
    [0.00000270973, 4.53462056041, 1044.9110187041],
    [0.0000026382, 3.76320728541, 63.9797157869],
    [0.00000238275, 5.9131647583, 1574.6019837987],
    [0.00000305244, 1.10529286976, 483.4643596621],
    [0.00000241411, 5.74870980326, 221.61966776881],
    [0.0000031498, 4.37056119892, 479.044571432],
    [0.00000223277, 4.01771641783, 13.9832765181],
    [0.00000292846, 3.8637696818, 424.39432780471],
    [0.00000304942, 1.75360932249, 6283.3196674749],
    [0.00000237167, 4.96019200454, 235.6343134493],
    [0.00000240608, 5.75032033143, 275.7943385166],
    [0.00000263455, 5.51056104098, 70.6056278207],
    [0.00000211236, 0.02154252782, 544.1618765797],
    [0.00000205878, 4.46555623121, 842.3944989716],
    [0.00000282395, 3.56598534931, 404.7506078317],
    [0.00000203077, 4.47228022052, 2104.2929488933],
    [0.00000267955, 3.49559055839, 121.4958389668],
    [0.00000238411, 4.99775321682, 138.2736793872],
    [0.00000230884, 4.03701073645, 497.69145366371],
    [0.00000203254, 2.93667823303, 284.39235822571],
    [0.00000216423, 2.44114933526, 8.32057233081],
    [0.00000194279, 5.27870729321, 190.9638774267],
    [0.00000216822, 6.14885127819, 429.28968891431],
    [0.00000191411, 5.14394229637, 1898.10740045609],
    [0.00000212655, 0.67418560513, 651.1868040614],
    [0.00000214969, 2.97753864449, 425.878800513],
    [0.00000236822, 3.57393144724, 219.6932520758],
    [0.00000229348, 1.65487599461, 270.1652642241],
    [0.00000174163, 3.29103993348, 426.8901924693],
    [0.00000202398, 2.42508237402, 39.6006933987],
    [0.00000179962, 2.48812846406, 404.2629728647],
    [0.0000016961, 4.780443547, 501.62360692681],
    [0.00000174157, 0.09324510966, 426.7938242497],
    [0.00000165778, 0.76098657662, 312.70353387701],
    [0.00000178798, 4.30679581382, 355.99256305531],
    [0.00000180904, 0.63787759163, 618.3128278281],
    [0.00000182548, 1.24685071391, 210.8345999358],
    [0.00000179529, 3.64276765573, 216.2512259072],
    [0.00000187071, 0.50925452549, 427.805216206],
    [0.00000180856, 3.08033197166, 84.5866436064],
    [0.00000196496, 5.26678343139, 489.0934339546],
    [0.00000151676, 0.75207673924, 213.38285422711],
    [0.00000151676, 4.13754942735, 213.70297161591],
    [0.0000015143, 3.90513550302, 220.7046440321],
    [0.00000193773, 3.3169057988, 2317.5920443313],
    [0.00000166996, 3.40695394996, 1280.0383901115],
    [0.00000189342, 1.32639271163, 207.3925737672],
    [0.00000180605, 0.04955573118, 492.06237937121],
    [0.0000017272, 5.73529325856, 1052.51220067191],
    [0.00000149398, 4.61667825955, 839.2131052339],
    [0.00000146617, 0.72929791759, 220.60827581251],
    [0.00000193842, 4.19725789426, 189.1638905333],
    [0.00000178668, 2.61010005515, 344.9468627914],
    [0.00000137031, 5.42161597844, 1148.00379292269],
    [0.00000185345, 5.12406505593, 602.00806815971],
    [0.00000158449, 3.42413570789, 179.6026629777],
    [0.00000167315, 3.34458985254, 73.5409433425],
    [0.0000015589, 4.99214316468, 289.8089841971],
    [0.00000159567, 5.53565697352, 359.173956793],
    [0.00000138554, 3.19924734717, 436.4032359151],
    [0.00000164796, 0.80382302783, 1375.52998236229],
    [0.00000167034, 1.61165618369, 142.20583265029],
    [0.00000128473, 5.80762617164, 107.2687449652],
    [0.0000014227, 2.75171852816, 636.95971005981],
    [0.00000177375, 3.1765260866, 10213.5293636945],
    [0.00000125618, 3.34222854569, 644.0732570606],
    [0.00000131798, 2.50083511264, 212.27088853431],
    [0.00000130711, 2.38850764149, 214.81493730871],
    [0.00000122905, 1.72530780843, 621.98185653281],
    [0.00000165088, 0.66708846026, 237.9219353097],
    [0.00000133438, 5.6556240057, 4.9096839295],
    [0.00000120114, 4.72829633676, 194.89603068979],
    [0.00000161862, 5.8081172665, 1795.5022612045],
    [0.00000116787, 1.61029914973, 113.6315324406],
    [0.0000011821, 5.63285421725, 1890.9938534553],
    [0.00000133448, 1.56209297419, 1478.62275658089],
    [0.00000111758, 0.99483567378, 206.3811818109],
    [0.00000152292, 0.56938816562, 515.70768857651],
    [0.0000012884, 1.45944172461, 247.4831628653],
    [0.00000110215, 5.22553112544, 5.872891776],
    [0.00000107434, 6.23762101588, 216.9874312176],
    [0.00000115948, 3.80548274408, 31.9995114309],
    [0.00000109063, 5.4716924719, 114.6429243969],
    [0.00000109273, 0.74841730668, 127.71561409031],
    [0.00000107429, 1.81399388771, 767.61290040431],
    [0.0000012616, 4.37110941347, 181.2995840071],
    [0.00000110176, 4.18234578108, 10.8018827804],
    [0.00000123129, 1.94869447093, 2.9375762542],
    [0.00000134189, 2.76336361412, 35.6685401356],
    [0.00000106815, 4.16300130274, 206.47755003051],
    [0.00000105829, 1.45649238999, 220.1351950605],
    [0.00000115432, 1.6424685738, 415.3086731286],
    [0.00000118293, 0.52518586111, 245.7862418359],
    [0.00000104354, 4.0331632384, 1073.85284167431],
    [0.00000095114, 5.17002113254, 643.32249753521],
    [0.00000099528, 1.42297994879, 426.3207434977],
    [0.00000097935, 4.84536515851, 2214.4992701127],
    [0.00000106628, 0.8103038922, 39.1130584317],
    [0.00000094853, 4.21773911052, 2420.68481854989],
    [0.00000096075, 6.02681746488, 448.1826493619],
    [0.00000104203, 4.30869132064, 1361.3028883607],
    [0.00000107375, 2.39490064055, 78.9575693139],
    [0.00000093096, 2.12427858259, 209.12312469139],
    [0.00000088042, 1.47468327901, 67.424234083],
    [0.00000093076, 2.33041461145, 69.3963417583],
    [0.00000089875, 5.49491788339, 134.8291610911],
    [0.00000086729, 4.33693429388, 0.719390363],
    [0.00000088055, 0.05558729242, 87.555589023],
    [0.00000086045, 4.47959291295, 525.7419968841],
    [0.00000084186, 0.68410696577, 144.39038864671],
    [0.00000081866, 3.25030344825, 20.850745303],
    [0.00000098341, 1.53715431353, 4.4366031775],
    [0.00000112464, 2.14098849805, 98.91680347199],
    [0.00000091321, 1.93807777759, 427.3632732213],
    [0.00000088237, 0.32719875572, 209.87388421679],
    [0.00000091544, 3.59720610688, 206.9506307825],
    [0.00000079761, 4.83472817526, 159.36824217371],
    [0.0000010044, 3.5488136814, 140.2457870625],
    [0.00000078269, 3.24353670896, 14.258463164],
    [0.00000093714, 2.83930960133, 203.49405039889],
    [0.00000077457, 0.17608698949, 191.7146369521],
    [0.0000008787, 1.80295838343, 342.4991822366],
    [0.00000080557, 0.23446317702, 125.743506415],
    [0.00000082279, 4.06810365664, 91.8032564712],
    [0.00000100767, 2.2029393793, 200.52510498229],
    [0.00000102819, 6.06771895402, 617.5620683027],
    [0.00000074922, 6.18045942087, 421.212934067],
    [0.00000074704, 0.69430051027, 1582.2031657665],
    [0.00000075306, 2.02562031906, 1376.0176173293],
    [0.00000071397, 2.45853219243, 630.5798762419],
    [0.00000070299, 5.82879783028, 5.6604434549],
    [0.0000009521, 2.04442457798, 1272.9248431107],
    [0.00000069326, 5.19530696709, 214.76675319891],
    [0.00000069326, 5.97750450668, 212.3190726441],
    [0.00000076148, 0.34812529439, 934.70469748469],
    [0.0000008076, 2.61290558453, 15.2216710105],
    [0.00000085274, 1.6181028957, 53.93085326429],
    [0.00000079268, 4.2619123881, 153.73916788121],
    [0.0000008189, 1.59839688347, 353.5448825005],
    [0.00000091253, 3.81884583659, 777.17412795991],
    [0.00000070965, 0.93242756417, 1265.81129610991],
    [0.00000086364, 2.726228868, 917.1760975389],
    [0.0000008166, 0.09321047637, 5.1728084879],
    [0.00000066327, 3.27691742733, 227.2823719561],
    [0.00000066404, 2.35001720349, 423.9212470527],
    [0.00000068065, 6.26038360145, 692.831301837],
    [0.00000081793, 3.08308557258, 2633.98391398789],
    [0.00000070972, 6.18608914757, 211.8459918921],
    [0.00000065212, 4.81833711198, 6.3941566378],
    [0.00000064142, 5.15573992685, 1464.3956625793],
    [0.00000063961, 0.28228675547, 185.2317372702],
    [0.00000065617, 4.17315140812, 542.78046973539],
    [0.00000062731, 3.35292072076, 320.5678404032],
    [0.00000073401, 1.4262291965, 286.8400387805],
    [0.00000063416, 2.84649923006, 3.1645787903],
    [0.00000061908, 0.61695293583, 329.48137429739],
    [0.00000077192, 1.20473000691, 46.71424039951],
    [0.00000070261, 0.0274462668, 337.9763281425],
    [0.00000058935, 3.09359530816, 128.7124518316],
    [0.00000059359, 4.68839528191, 50.9619078477],
    [0.00000071174, 0.94418960401, 74.53778108379],
    [0.00000059979, 5.36194030187, 2207.38572311189],
    [0.00000078873, 6.18668375333, 299.37021175271],
    [0.00000060704, 0.73825309757, 182.5234242845],
    [0.00000063502, 2.38997253041, 391.4172857074],
    [0.00000060272, 3.53054844171, 416.547067621],
    [0.00000056662, 0.0312662389, 267.71758366931],
    [0.00000066008, 4.0804569554, 778.6586006682],
    [0.00000066706, 2.5609613199, 221.17772478411],
    [0.00000066363, 0.16881593879, 696.7634551001],
    [0.00000055245, 5.78088729365, 437.136949098],
    [0.00000055098, 1.58209601288, 387.4851324443],
    [0.00000071893, 0.57617376095, 1691.9218520189],
    [0.00000059023, 4.97848918827, 215.2398339509],
    [0.00000054012, 6.18919211339, 627.61093082531],
    [0.00000053837, 4.52951978106, 241.8540885728],
    [0.00000063323, 5.0791311625, 576.4052054941],
    [0.00000067784, 3.40092497147, 116.18227885939],
    [0.00000068327, 1.18421764248, 1795.0146262375],
    [0.00000074859, 5.67759501336, 2.69149803831],
    [0.00000054888, 5.74041329041, 312.4429014461],
    [0.00000054393, 4.49204534403, 134.3415261241],
    [0.0000005625, 0.73800257133, 273.34665796181],
    [0.00000056864, 1.30791461253, 445.00125562421],
    [0.000000586, 5.77716291851, 323.2615991739],
    [0.00000050765, 4.71246376027, 224.1009782184],
    [0.00000051202, 1.92483709708, 7.30918037451],
    [0.00000052403, 1.2249434607, 518.8890823142],
    [0.00000064155, 5.72635780004, 422.1761419135],
    [0.00000050427, 6.01983026969, 214.97920152001],
    [0.00000050427, 5.15298120408, 212.10662432301],
    [0.000000629, 0.76074425315, 3.21276290011],
    [0.00000055902, 3.82234323799, 1.24065522479],
    [0.00000050047, 5.69562605727, 292.2566647519],
    [0.00000049142, 3.45523655555, 618.0497032697],
    [0.00000055589, 5.00243604255, 221.40721944771],
    [0.00000050005, 4.56446098577, 2530.8911397693],
    [0.00000059759, 0.33324455917, 439.37218133171],
    [0.00000047716, 0.39295849664, 219.9057003969],
    [0.00000063636, 5.56781141579, 2111.8941308611],
    [0.00000048821, 1.11954873085, 30.7756711535],
    [0.00000049427, 4.10715723619, 282.6954371963],
    [0.00000064684, 1.40586799806, 305.5899868762],
    [0.00000049622, 2.64477674752, 431.03479405351],
    [0.00000058187, 2.85345969595, 348.1282565291],
    [0.00000048661, 3.16552973997, 97.11681657861],
    [0.0000004871, 0.89401886908, 429.7627696663],
    [0.00000065208, 3.36533374596, 487.1213262793],
    [0.00000046209, 6.11163408466, 426.0912488341],
    [0.00000058609, 1.53711331943, 1169.83206889211],
    [0.00000055906, 2.58196718879, 418.76525351221],
    [0.00000051943, 5.13191462514, 199.528267241],
    [0.00000054149, 5.95504378991, 729.0067840145],
    [0.00000044466, 3.96307178488, 2737.0766882065],
    [0.00000055947, 2.08615316919, 638.65663108921],
    [0.0000004329, 4.8048405286, 339.53023682],
    [0.00000042587, 0.60370993867, 421.4253823881],
    [0.000000529, 6.04236572471, 205.67860639531],
    [0.00000041439, 2.47464431042, 120.1144321225],
    [0.00000047251, 1.55094667019, 558.2459582294],
    [0.00000048495, 5.11989933898, 7.4055485941],
    [0.00000047908, 4.49005771863, 192.935985102],
    [0.0000004403, 1.76632610072, 24.1352049047],
    [0.00000045108, 6.06459427723, 227.557558602],
    [0.00000046355, 3.10853873073, 432.471082652],
    [0.00000053109, 4.45380505884, 167.07249000551],
    [0.00000045868, 2.33132835068, 205.90810105891],
    [0.00000041458, 4.1119753953, 1677.6947580173],
    [0.00000037152, 4.50776996086, 207.1801254461],
    [0.00000047404, 3.38391475216, 6.8360996225],
    [0.00000038168, 4.08180868423, 244.5624015585],
    [0.00000036628, 3.66787249773, 427.5927678849],
    [0.00000045029, 2.03211615844, 428.32648106781],
    [0.00000036896, 0.49263625994, 1898.5950354231],
    [0.00000038453, 5.9952996787, 209.3983113373],
    [0.00000048446, 1.21352554632, 68.90870679129],
    [0.0000003882, 3.98768004395, 117.0760507367],
    [0.00000040434, 0.44979537196, 234.149840741],
    [0.00000036263, 1.46717537926, 273.8222308413],
    [0.00000049643, 6.20072079882, 3340.8562441833],
    [0.00000035063, 3.13493629794, 34.1840674273],
    [0.00000037471, 5.17760779965, 217.68751450571],
    [0.00000046113, 0.83857991425, 212.6491410442],
    [0.00000046113, 4.05104625234, 214.43668479881],
    [0.00000037195, 1.57230760584, 41.4006802921],
    [0.00000036077, 4.65555472093, 867.6672932371],
    [0.00000037351, 0.06652028564, 1251.0965671413],
    [0.0000003423, 1.60559863103, 182.05034353251],
    [0.00000041145, 0.98859396839, 33.6964324603],
    [0.00000040662, 2.49012270106, 59.55992755679],
    [0.00000043402, 3.89634394974, 135.3047339706],
    [0.00000039654, 3.59602932397, 113.89465699899],
    [0.00000036261, 2.48589063916, 28.0673581678],
    [0.00000032687, 2.96330012868, 956.04533848709],
    [0.00000033157, 5.57688316935, 89.10949770051],
    [0.00000036698, 3.68604273428, 431.5078748055],
    [0.00000033531, 2.34303179257, 81.50831573269],
    [0.00000031599, 2.62632521648, 553.82616999929],
    [0.00000031098, 4.89394578356, 1780.78753223589],
    [0.00000037751, 6.02905345714, 319.8170808778],
    [0.00000035774, 6.21453795302, 137.2768416459],
    [0.0000003973, 0.0418816173, 739.0410923221],
    [0.0000003835, 0.00615623981, 145.874861355],
    [0.00000034642, 1.89884834343, 77.9943614674],
    [0.0000003157, 3.30002041912, 466.1988842747],
    [0.0000003936, 2.19565810576, 374.15181032],
    [0.00000031496, 0.96043262389, 24.6228398717],
    [0.00000030207, 5.08475977345, 2523.7775927685],
    [0.00000029335, 6.18456452708, 131.79077970531],
    [0.00000040419, 0.63548950495, 1692.40948698591],
    [0.00000031724, 0.72175533744, 333.9011625275],
    [0.00000034923, 2.85187519613, 2950.3757836445],
    [0.00000028746, 1.71197970691, 406.23508054],
    [0.00000028755, 0.15837943003, 193.09604379641],
    [0.00000035049, 2.84712825648, 381.5954257209],
    [0.00000027298, 0.86827415264, 60.52313540329],
    [0.00000035019, 0.26058304344, 23.81969071961],
    [0.00000027836, 1.17681685755, 216.51185833811],
    [0.00000036108, 1.48596443213, 756.07956517339],
    [0.00000029306, 3.55420436272, 464.97504399731],
    [0.00000027049, 2.92553690245, 361.62163734781],
    [0.00000034876, 1.11340331736, 39.86132582961],
    [0.00000027398, 3.07953286472, 411.8641548325],
    [0.00000026699, 3.34823660722, 313.4542934024],
    [0.00000031423, 1.41211589868, 0.50694204189],
    [0.00000033616, 5.77820346759, 395.8225197225],
    [0.00000026335, 3.73861907459, 0.7650823453],
    [0.00000026583, 3.25633746796, 245.03548231051],
    [0.00000032446, 4.84330341651, 423.17297965479],
    [0.00000035965, 0.81545997217, 2111.40649589409],
    [0.00000027132, 3.74886922172, 60.04756252381],
    [0.00000025856, 4.81175731698, 16.9185920399],
    [0.00000029986, 3.32251668307, 710.99054910171],
    [0.00000032943, 3.73798438144, 339.042601853],
    [0.00000027965, 0.70019337757, 852.9525642685],
    [0.00000026667, 3.61851114795, 210.5739675049],
    [0.00000028346, 1.92868741776, 281.210964488],
    [0.00000025306, 4.73124679745, 233.9897820466],
    [0.00000025371, 1.6900098251, 412.827362679],
    [0.00000025734, 2.25578963103, 459.0853372739],
    [0.00000026331, 0.45420938431, 494.510059926],
    [0.00000030392, 2.9580814433, 129.6756596781],
    [0.00000025998, 5.8571396258, 681.2979666061],
    [0.00000033249, 1.8810637287, 162.3371875903],
    [0.00000034168, 0.39863588958, 260.01333583751],
    [0.00000033256, 4.7324356854, 342.0115472696],
    [0.00000026237, 0.63347048675, 45.3328335552],
    [0.00000024623, 5.09765340751, 618.8004627951],
    [0.00000033518, 2.30165851435, 26.84351789039],
    [0.0000002719, 6.13268298688, 211.8983815188],
    [0.0000002719, 5.04012848689, 215.1874443242],
    [0.00000029507, 1.24794264854, 455.1531840108],
    [0.00000032634, 0.34866766006, 2008.3137216755],
    [0.00000025187, 2.51192814934, 1272.4372081437],
    [0.00000025644, 3.86292975641, 230.2176874779],
    [0.00000024787, 4.28010726699, 2847.28300942589],
    [0.0000002367, 1.51334180608, 106.0303504728],
    [0.00000023511, 4.48384165181, 214.34606207361],
    [0.00000023511, 0.40578451478, 212.73976376941],
    [0.00000023747, 2.29348970322, 467.9988711681],
    [0.00000030107, 3.53377474522, 408.19512612779],
    [0.00000027532, 2.92483319573, 430.2865266556],
    [0.00000024105, 1.45469526113, 422.64922266551],
    [0.00000024814, 1.6754964886, 329.9690092644],
    [0.00000025569, 3.0702618307, 174.9222423167],
    [0.00000024522, 0.25792931265, 420.6916692052],
    [0.00000023164, 2.54403428184, 245.2986068689],
    [0.00000024171, 5.58810453278, 184.97110483931],
    [0.00000022048, 5.33604766656, 163.1403367424],
    [0.00000022198, 2.48883901199, 426.7301337749],
    [0.00000025834, 3.42571919082, 405.5013673571],
    [0.00000021674, 1.75719521673, 2119.00767786191],
    [0.00000023225, 1.32324288348, 207.32313779801],
    [0.00000021571, 3.69323223915, 7.87862934611],
    [0.0000002708, 0.13937719095, 1155.6049748905],
    [0.00000021569, 3.20671779872, 224.8492456163],
    [0.00000021638, 2.59969528542, 432.2586343309],
    [0.00000022198, 0.89868151046, 426.9538829441],
    [0.00000021066, 6.12707563148, 508.10650660869],
    [0.00000022956, 4.15344353916, 93.1846633155],
    [0.00000022695, 1.52975337199, 223.5772212291],
    [0.00000027166, 0.08679484081, 36.892380413],
    [0.00000025768, 5.84872192947, 143.9027536797],
    [0.00000022341, 3.56638187846, 219.76268804501],
    [0.00000020372, 4.40717131664, 849.5080459724],
    [0.00000027791, 5.00076987801, 106.7811099982],
    [0.00000020257, 2.36409011623, 131.6477673534],
    [0.00000024029, 2.54607748587, 334.7949344048],
    [0.00000020321, 3.71713466857, 3053.46855786309],
    [0.0000002176, 1.87467800066, 264.2610032857],
    [0.00000019818, 2.87228791193, 357.68948408471],
    [0.00000021046, 5.57803586395, 242.11472100371],
    [0.00000022078, 3.53915870761, 186.4555775476],
    [0.0000002133, 2.40736518098, 343.4623900831],
    [0.00000023629, 5.94897428321, 333.4135275605],
    [0.00000024992, 4.48787502141, 31.73638687251],
    [0.00000024756, 4.22954187784, 46.4536079686],
    [0.00000025007, 5.30587581385, 2428.2860005177],
    [0.00000023761, 5.47300746239, 536.5606946119],
    [0.00000021722, 0.38410941425, 202.760337216],
    [0.0000001892, 5.02923263215, 171.8984151459],
    [0.00000018653, 0.27903946815, 427.0544566806],
    [0.00000018653, 3.1084810543, 426.6295600384],
    [0.00000021149, 0.84965595278, 320.0802054362],
    [0.00000025426, 0.10718425313, 481.01667910731],
    [0.00000022841, 0.14442813021, 451.2210307477],
    [0.00000023911, 2.97613048908, 264.7486382527],
    [0.00000022993, 1.52199009068, 556.7614855211],
    [0.00000019429, 2.06971667626, 392.9017584157],
    [0.00000022024, 1.24219628349, 112.8978192577],
    [0.00000023549, 6.12523396053, 593.67068088151],
    [0.00000019967, 6.07285120389, 1567.48843679789],
    [0.00000022876, 2.43650477347, 67.91186905],
    [0.00000019677, 3.01153643104, 216.2366716922],
    [0.0000002375, 6.07536125242, 462.2667310116],
    [0.00000022555, 2.04140779152, 78.4699343469],
    [0.00000020143, 5.23192874336, 963.6465204549],
    [0.00000021017, 3.71041617725, 402.4629859713],
    [0.00000021934, 2.56964611043, 347.6406215621],
    [0.00000017902, 1.45854327689, 555.7982776746],
    [0.00000020903, 6.26285263273, 66.4610262365],
    [0.00000018918, 3.18987164241, 561.4273519671],
    [0.00000017876, 0.23711641897, 2214.98690507971],
    [0.00000017731, 6.25218307104, 460.7822583033],
    [0.00000017098, 4.61479892752, 146.8380692015],
    [0.00000024044, 4.15983188816, 141.46962733991],
    [0.00000016884, 3.21168698004, 478.0477336907],
    [0.0000001889, 4.70830613247, 572.473052231],
    [0.00000018099, 6.25077296647, 230.9514006608],
    [0.00000018165, 0.82492001036, 533.8669358412],
    [0.00000020525, 3.30359301299, 156.9205616189],
    [0.00000016659, 3.10651814375, 419.77664546851],
    [0.00000023314, 0.03668815157, 280.723329521],
    [0.00000018637, 4.27871136207, 152.77596003471],
    [0.00000016704, 1.27514451558, 422.42222012939],
    [0.00000016529, 5.88739273505, 533.37930087419],
    [0.00000016486, 1.18131009643, 835.28095197081],
    [0.00000017269, 6.09621582994, 200.2095907972],
    [0.00000020803, 3.23661551748, 175.6705097146],
    [0.00000018263, 3.29914267725, 906.130397275],
    [0.00000017267, 5.27709845883, 295.4380584896],
    [0.00000017953, 0.75321094297, 547.2002579655],
    [0.00000022334, 4.0624434478, 423.87306294291],
    [0.00000020308, 1.06278645094, 294.80741117069],
    [0.00000016381, 5.86040104652, 263.9454891006],
    [0.00000016267, 2.15375878438, 1486.2239385487],
    [0.0000001854, 4.98517065544, 552.829332258],
    [0.00000016627, 1.54374663198, 1.20702533],
    [0.00000016245, 5.66731880104, 99.6675629974],
    [0.00000016399, 5.61888178859, 757.4609720177],
    [0.00000018383, 1.33769122464, 240.6302482954],
    [0.00000016013, 4.62895816065, 2097.1794018925],
    [0.00000015991, 3.77204289063, 1055.6935944096],
    [0.00000016379, 4.22158560955, 692.34366686999],
    [0.00000021494, 3.37089777455, 206.64181424181],
    [0.0000001584, 1.39791514296, 831.3487987077],
    [0.00000016271, 0.22203110018, 526.00262931501],
    [0.00000016436, 3.95361231238, 1994.08662767389],
    [0.00000018303, 5.55336775323, 100.14064374939],
    [0.00000016892, 2.18137146685, 1588.82907780029],
    [0.00000016255, 5.06377532297, 226.8762350458],
    [0.00000015567, 3.11397846224, 220.54458533771],
    [0.00000015921, 4.81397888311, 2840.1694624251],
    [0.00000016234, 0.62092736572, 490.09027169589],
    [0.00000015273, 0.19945798941, 78.2068097885],
    [0.00000015648, 1.75194347964, 215.54865049161],
    [0.00000015648, 3.13768268695, 211.53717535141],
    [0.00000018382, 1.75927851154, 220.44401160121],
    [0.00000016593, 4.99590657727, 109.48693085641],
    [0.00000018947, 3.0727713488, 637.69342324271],
    [0.00000016216, 5.9961519935, 41.2976144281],
    [0.00000020572, 0.76699318042, 285.61619850311],
    [0.00000016595, 4.77017702394, 364.5905827644],
    [0.00000017326, 2.91676943616, 200.04953210281],
    [0.00000014971, 1.76753173425, 646.76701583129],
    [0.00000016383, 2.67389070738, 204.1417440603],
    [0.00000016103, 6.2153490892, 419.6802772489],
    [0.00000014886, 5.37199893369, 416.059432654],
    [0.0000001836, 0.30630166172, 211.5708052462],
    [0.00000019474, 0.31238053169, 2008.8013566425],
    [0.00000020381, 5.74839865243, 108.0024581481],
    [0.00000014597, 2.13836272063, 110.4019545931],
    [0.00000016369, 2.18957268546, 172.70156429801],
    [0.00000014609, 4.75981242464, 942.3058794525],
    [0.00000014822, 1.69517172807, 196.01680510321],
    [0.00000014578, 6.12937723629, 255.1874106971],
    [0.00000017284, 4.99761394207, 254.6997757301],
    [0.0000001579, 0.36558450473, 410.1672338031],
    [0.0000001912, 0.46326457877, 2427.7983655507],
    [0.00000017766, 2.37155421942, 50.6463936626],
    [0.00000014974, 1.81004476813, 65.46418849521],
    [0.00000019645, 2.85465946217, 14.7340360435],
    [0.00000015462, 2.21494463682, 222.9440817827],
    [0.00000015819, 2.67749213694, 82.13896305161],
    [0.00000017917, 4.36815293872, 83.1021708981],
    [0.00000014016, 0.92450223186, 427.10264079041],
    [0.00000015063, 5.7450914092, 441.8198618865],
    [0.00000017883, 1.34689508017, 458.5977023069],
    [0.00000015768, 2.9643838871, 349.0914643756],
    [0.00000019463, 2.98264756234, 72.31710306511],
    [0.00000014016, 2.46301834168, 426.58137592861],
    [0.00000013854, 0.75800637269, 13.0895046408],
    [0.00000015926, 1.97285675652, 227.03629374021],
    [0.00000015265, 0.04040736838, 272.85902299479],
    [0.00000014549, 5.33546747079, 110.49832281271],
    [0.00000015012, 1.52188645554, 220.7683345069],
    [0.00000014376, 4.16551027176, 448.9334088873],
    [0.0000001506, 0.93153679046, 980.91199584231],
    [0.00000017967, 4.60399955084, 702.3925293926],
    [0.00000013507, 5.23541303763, 295.2950461377],
    [0.00000015721, 4.36361091765, 570.98857952271],
    [0.00000013819, 5.98054140713, 457.8614969965],
    [0.00000016412, 2.75370681275, 222.14093263061],
    [0.00000016702, 1.14048158507, 100.8889111473],
    [0.00000016229, 2.40723643991, 111.4133465494],
    [0.0000001383, 5.0021484906, 434.91876320681],
    [0.00000018336, 6.24789499113, 170.2538837432],
    [0.00000014088, 1.63837940688, 540.98048284201],
    [0.00000013344, 3.19063924466, 231.06902073981],
    [0.00000013303, 5.33441711554, 472.4186593982],
    [0.00000015477, 1.91986373629, 543.2681047024],
    [0.00000012978, 0.29728403273, 241.9971009247],
    [0.00000015002, 2.63220592483, 3266.76765330109],
    [0.00000017598, 0.09177348842, 569.29165849331],
    [0.00000015115, 1.81478587044, 420.2497262205],
    [0.00000012874, 4.06856554799, 258.6319289932],
    [0.00000016607, 1.08565905389, 28.32799059869],
    [0.00000015813, 1.66003803389, 251.4153161284],
    [0.00000013957, 6.17562128071, 864.4858994994],
    [0.00000015413, 5.17895957732, 259.1195639602],
    [0.00000016676, 5.57821764943, 705.36147480921],
    [0.00000012604, 4.01665305123, 3163.6748790825],
    [0.00000012578, 1.8826641242, 238.815707187],
    [0.00000012841, 3.51894672028, 149.3193796511],
    [0.00000012315, 0.48556165492, 326.9306278786],
    [0.00000013217, 4.23672411657, 188.41313100791],
    [0.00000012147, 4.43773570062, 267.22994870229],
    [0.00000012395, 5.58009272761, 642.58878435231],
    [0.00000014104, 3.9782014756, 230.8083883089],
    [0.00000014269, 5.84355484645, 42.78208713641],
    [0.00000011476, 0.33769530075, 280.2477566415],
    [0.0000001177, 1.63857719213, 1685.2959399851],
    [0.00000011418, 4.11865342199, 97.9199657307],
    [0.00000012752, 0.60015594538, 274.30986580831],
    [0.00000013026, 0.83195857087, 193.8991929485],
    [0.00000011246, 5.33738032742, 120.01136625851],
    [0.00000011976, 4.20420231489, 380.37158544351],
    [0.00000011206, 4.12139982038, 714.92270236481],
    [0.00000014434, 3.77669932178, 387.22450001341],
    [0.0000001197, 3.36773444346, 203.5086046139],
    [0.00000014741, 0.14243884205, 2324.70559133209],
    [0.00000012049, 2.72046266179, 254.38426154501],
    [0.00000010842, 2.54339582028, 640.1892879073],
    [0.0000001335, 2.22655107118, 639.177895951],
    [0.00000014697, 2.83603289141, 432.9923475138],
    [0.00000010885, 5.03796570992, 17.28229033479],
    [0.0000001125, 2.69387714803, 105.76971804189],
    [0.0000001374, 4.38241554958, 815.3071635977],
    [0.00000010769, 4.58820128164, 19.36627259471],
    [0.0000001285, 0.91462129399, 196.2774375341],
    [0.00000010505, 1.77592799454, 206.54124050531],
    [0.00000010385, 0.04027914669, 197.08058668621],
    [0.00000010842, 5.62879282141, 640.0929196877],
    [0.0000001029, 1.78563521014, 202.2365802267],
    [0.00000013234, 3.20279026751, 894.5970620441],
    [0.00000010647, 1.24718121251, 819.8154634768],
    [0.00000010182, 3.46948577873, 3369.8604275197],
    [0.0000001021, 2.71190577157, 107.52937739611],
    [0.00000011258, 1.03965055384, 189.96703968541],
    [0.00000011951, 1.3991505951, 732.1881777522],
    [0.00000013918, 1.27194064881, 486.64575339981],
    [0.00000010041, 3.90629251299, 606.5163680388],
    [0.00000014076, 4.92923629549, 256.8319420998],
    [0.00000012084, 6.20546846687, 1471.9968445471],
    [0.00000010842, 5.79198301588, 1883.8803064545],
    [0.00000011375, 3.55965858898, 106.2573530089],
    [0.00000012596, 4.62753200111, 403.26613512341],
    [0.00000011028, 0.09766487939, 468.4865061351],
    [0.0000000986, 3.35807537498, 33.3809182752],
    [0.00000012108, 0.9559857552, 355.50492808829],
    [0.00000010908, 6.0747444934, 186.71620997851],
    [0.00000009594, 3.20545536162, 434.0037394701],
    [0.00000010453, 1.88602527977, 1905.2209474569],
    [0.00000009546, 6.27898280696, 189.47940471839],
    [0.00000011233, 6.08951773665, 641.104311644],
    [0.00000009914, 2.69261802946, 47.9380806769],
    [0.00000009448, 3.7952880265, 407.1982883865],
    [0.00000009546, 2.32156584631, 219.3844355351],
    [0.00000010366, 4.21638187695, 196.8681383651],
    [0.0000000937, 4.84934706586, 230.0052391568],
    [0.00000011272, 1.42491841284, 731.70054278519],
    [0.00000009924, 1.76983918803, 275.3067035496],
    [0.00000009472, 3.02102603461, 194.42045781031],
    [0.00000012896, 5.20406219171, 662.28738607949],
    [0.0000000915, 5.91506282258, 526.2657538734],
    [0.00000011879, 5.41287240833, 477.5600987237],
    [0.00000010766, 5.03028444466, 240.36961586451],
    [0.00000009308, 1.90005607885, 1368.9040703285],
    [0.00000009735, 0.01733679462, 433.90737125051],
    [0.00000010066, 0.49580184666, 424.1336953738],
    [0.00000010907, 2.37428912808, 351.5727748252],
    [0.00000012189, 0.10561088119, 480.52904414029],
    [0.00000011289, 4.81811083501, 390.19344543],
    [0.00000011032, 0.45219265612, 395.34943897051],
    [0.00000008918, 1.33335067145, 19.8875374565],
    [0.00000009676, 0.65354176165, 238.6726948351],
    [0.00000010312, 2.72426681922, 17.0216579039],
    [0.00000008636, 1.24833063898, 92.2908914382],
    [0.00000008732, 6.24118097005, 157.8837694654],
    [0.00000009566, 2.65682037428, 1493.3374855495],
    [0.00000010066, 2.89171872688, 429.5503213452],
    [0.00000009374, 3.36841689456, 206.3174913361],
    [0.00000009533, 3.8618658557, 237.11878615761],
    [0.0000000978, 1.98440642041, 850.25880549781],
    [0.00000008433, 3.38649663082, 427.00206705391],
    [0.00000008433, 0.00102394272, 426.68194966511],
    [0.0000001024, 0.08948242268, 2744.1902352073],
    [0.00000008356, 5.8920407863, 824.4983762653],
    [0.00000009888, 2.77223505114, 9.3174100721],
    [0.00000008509, 4.55107024764, 3156.5613320817],
    [0.00000008903, 2.43701337444, 649.7023313531],
    [0.00000008389, 1.8715620613, 232.66536803271],
    [0.00000008197, 4.485102676, 90.0032695778],
    [0.00000008246, 2.28450832726, 194.6329061314],
    [0.00000008317, 5.27910556579, 661.4817447999],
    [0.00000008295, 6.23450481902, 2531.3787747363],
    [0.00000011264, 4.90896177094, 269.6776292571],
    [0.00000011219, 0.89543432392, 453.9293437334],
    [0.0000000897, 0.94637919422, 187.67941782501],
    [0.00000008956, 4.32326904941, 749.8597900499],
    [0.00000010013, 5.08881881994, 2744.6778701743],
    [0.00000010091, 5.94884155369, 495.9945326343],
    [0.00000008906, 2.5992680081, 518.40144734719],
    [0.00000007978, 3.25297918872, 394.5986794451],
    [0.00000007792, 4.3953359762, 2413.5712715491],
    [0.00000008025, 5.87214492419, 830.8611637407],
    [0.00000010403, 1.95210095051, 354.76872277791],
    [0.00000008025, 2.81881910919, 857.3723524986],
    [0.00000010165, 3.22806325066, 192.448350135],
    [0.00000009333, 1.37795990025, 471.9310244312],
    [0.00000009111, 5.92051859374, 167.9662618828],
    [0.00000009887, 4.36672786548, 29.44876501211],
    [0.00000007646, 5.75335152073, 487.60896124631],
    [0.00000009194, 1.79966840336, 594.8945211589],
    [0.00000007695, 2.58075308553, 207.7013903079],
    [0.00000007915, 2.15566286238, 131.16013238639],
    [0.00000007999, 5.76892400113, 256.08118257441],
    [0.00000009422, 0.15761540408, 172.48911597691],
    [0.00000008126, 3.5547924123, 402.77850015639],
    [0.00000010105, 1.94180807216, 204.9448932124],
    [0.00000007633, 4.41396657448, 511.2879003464],
    [0.00000009479, 2.23711171898, 350.08830211689],
    [0.00000008422, 4.22542750723, 503.1080796351],
    [0.00000007684, 3.51633534377, 305.10235190919],
    [0.00000009659, 0.66283481907, 380.6322178744],
    [0.00000007375, 1.29638062215, 367.03826331921],
    [0.00000009835, 0.05817782312, 2325.1932262991],
    [0.00000007261, 1.35829329188, 69.6087900794],
    [0.00000007327, 2.60511788764, 232.4529197116],
    [0.00000008716, 6.17750630025, 405.0137323901],
    [0.00000009076, 3.97326051682, 237.4343003427],
    [0.00000009427, 6.0760473485, 418.2439886504],
    [0.00000007385, 0.5737454199, 141.208994909],
    [0.00000007235, 1.35532322396, 2001.68780964171],
    [0.00000007849, 0.39800874682, 176.894349992],
    [0.00000007786, 4.61643541892, 100.1551979644],
    [0.00000007111, 2.35979437658, 72.577735496],
    [0.00000009164, 2.48785028898, 562.3905598136],
    [0.00000007298, 1.74992346676, 425.56998397231],
    [0.00000007773, 1.62452877443, 144.1779403256],
    [0.00000007342, 4.29624613644, 326.1969146957],
    [0.00000007093, 2.36284513741, 291.5059052265],
    [0.00000006873, 3.87250231635, 2310.4784973305],
    [0.0000000866, 0.53084594475, 343.9836549449],
    [0.00000009119, 6.14182394487, 113.15845168861],
    [0.00000007614, 3.93985644686, 239.40640801801],
    [0.00000007081, 3.27322993659, 448.98829064149],
    [0.00000007895, 5.03449455718, 1169.34443392509],
    [0.00000007696, 2.59606158308, 746.67839631219],
    [0.00000007903, 0.76470523272, 84.6897094704],
    [0.00000007977, 6.08347168017, 171.0046432686],
    [0.00000007298, 1.63759710678, 428.11403274671],
    [0.00000008742, 4.49162081829, 739.5648493114],
    [0.0000000759, 2.40747801188, 1802.6158082053],
    [0.00000008186, 1.53974993955, 28.6980054867],
    [0.00000007872, 2.84703772391, 135.5799206165],
    [0.00000006935, 3.25946441452, 1287.15193711231],
    [0.00000006519, 4.28288912869, 314.1880065853],
    [0.00000006628, 4.94895033186, 269.2020563776],
    [0.00000008878, 3.02260106254, 190.6483632416],
    [0.00000008467, 4.31417662024, 486.1581184328],
    [0.00000006757, 1.37932220229, 419.20719649691],
    [0.00000006377, 1.22293688706, 526.7533888404],
    [0.00000007376, 3.69180714802, 25.3590451821],
    [0.00000006333, 1.48800604479, 117.6667515677],
    [0.00000006682, 3.91151906705, 110.9714035647],
    [0.00000006651, 5.17190850506, 385.7882114149],
    [0.00000007569, 5.15022034917, 196.1344251822],
    [0.0000000736, 2.13385617362, 128.6093859676],
    [0.00000006901, 4.51033589337, 250.191475851],
    [0.00000007381, 2.56818287176, 376.4394321804],
    [0.00000007504, 0.59008062582, 397.63706083091],
    [0.00000007473, 4.00525270573, 24.88596443009],
    [0.00000006275, 1.06369744472, 329.1658601123],
    [0.0000000757, 3.02874986191, 990.47322339791],
    [0.00000006057, 4.42905792653, 856.62159297321],
    [0.00000006364, 1.67678982628, 2221.6128171135],
    [0.00000005928, 0.04731871122, 505.5557601899],
    [0.00000007836, 5.45653203333, 129.2000867986],
    [0.00000006147, 0.67579092414, 639.6198389357],
    [0.00000006324, 5.73872165534, 756.56720014041],
    [0.00000005898, 2.55127874457, 73.0533083755],
    [0.00000006943, 2.32469404402, 141.7302597708],
    [0.00000005913, 6.06018875597, 121.2352065359],
    [0.00000005823, 1.61871389354, 843.8789716799],
    [0.00000006807, 5.39402662205, 384.3037387066],
    [0.00000006016, 3.74116326543, 3480.06674873909],
    [0.00000006641, 5.0297230003, 95.6323438703],
    [0.00000006458, 2.40544724008, 3583.1595229577],
    [0.00000007069, 5.79770704301, 910.0625505381],
    [0.00000007779, 3.17906379215, 724.5869957844],
    [0.00000007221, 0.99307096935, 312.9666584354],
    [0.0000000761, 3.02066477143, 25.516611749],
    [0.00000007748, 0.35371355288, 55.4153259726],
    [0.00000007664, 1.86348422475, 236.4374626014],
    [0.00000005819, 4.79812800922, 210.88278404561],
    [0.00000005819, 0.09149815737, 216.2030417974],
    [0.00000006261, 3.40399529731, 109.92887384111],
    [0.00000006136, 5.77727217314, 297.9888049084],
    [0.00000005471, 1.39114507199, 672.3844327119],
    [0.00000005971, 5.5208196703, 2200.2721761111],
    [0.00000006662, 0.77274894862, 611.1992808273],
    [0.00000006604, 0.41941287758, 393.2172726008],
    [0.00000005774, 3.77827896207, 97.17169833279],
    [0.00000005678, 5.61713898188, 17.5092928709],
    [0.00000005771, 0.05335845955, 164.78486814511],
    [0.00000006577, 6.26135869387, 2641.0974609887],
    [0.00000005341, 1.76885678471, 104.82106441041],
    [0.00000006085, 0.58940873359, 433.4342904985],
    [0.00000006219, 5.501461104, 100.4012761803],
    [0.00000005285, 4.44903100722, 37.88921815429],
    [0.00000005304, 5.79491653729, 397.14942586389],
    [0.00000006082, 1.19286005781, 640.66236865931],
    [0.00000006287, 0.6654902509, 636.47207509279],
    [0.00000005677, 3.09420329388, 208.4351034908],
    [0.00000005677, 1.79542287271, 218.6507223522],
    [0.00000005284, 5.43816540149, 760.4993534035],
    [0.00000007032, 6.12709991872, 244.0747665915],
    [0.00000005102, 2.35225677161, 319.5564484469],
    [0.00000006572, 2.03290295505, 1130.47519297691],
    [0.00000005363, 6.25943152476, 700.90805668431],
    [0.00000005071, 0.09529125238, 806.96977631951],
    [0.00000006462, 5.68471426394, 370.2196570569],
    [0.00000005365, 2.31649860836, 170.51700830159],
    [0.00000006508, 0.80289944068, 566.8439779385],
    [0.00000005532, 3.51315539521, 115.8667646743],
    [0.00000005557, 6.06370454687, 1788.38871420371],
    [0.000000049, 2.05095023209, 5.385256809],
    [0.00000004866, 3.12125648181, 533.1161763158],
    [0.00000004838, 3.19533526201, 2.7251279331],
    [0.00000004827, 3.21632443448, 3686.2522971763],
    [0.00000005563, 0.76539820211, 508.5941415757],
    [0.00000005497, 5.67484207544, 551.27542358051],
    [0.00000006373, 5.73650670449, 310.4707937708],
    [0.00000004825, 3.34774899951, 184.3379653929],
    [0.00000004857, 1.54189437048, 124.2590337067],
    [0.00000005731, 0.62968033303, 525.2543619171],
    [0.00000005593, 1.30288660608, 320.8284728341],
    [0.00000005962, 1.91859895835, 411.3765198655],
    [0.0000000489, 0.99447912964, 383.81610373959],
    [0.00000004978, 4.78098070731, 178.33063859051],
    [0.00000006082, 3.68743535734, 54.89406111079],
    [0.00000005118, 5.00411789229, 89.0400617313],
    [0.00000005637, 0.71124772957, 500.1391342185],
    [0.00000005571, 6.04641962947, 3060.5821048639],
    [0.00000006493, 4.38605840365, 26088.1469590577],
    [0.00000005591, 2.54795843844, 285.35556607221],
    [0.000000048, 0.42879092939, 1383.13116433011],
    [0.00000005463, 4.67524250178, 57.86300652739],
    [0.00000005035, 0.56276653096, 658.30035106221],
    [0.00000004758, 1.51996664773, 632.06434895021],
    [0.00000005081, 5.4243549602, 482.9767246951],
    [0.00000004612, 5.47321184962, 634.512029505],
    [0.00000006057, 5.77967962177, 1045.3986536711],
    [0.00000004578, 4.49110882286, 271.6497369324],
    [0.00000005515, 5.87000879666, 455.41381644171],
    [0.00000005305, 3.30135414196, 484.9488323704],
    [0.0000000544, 0.49478776063, 770.0605809591],
    [0.00000004994, 5.98784026769, 42.88515300039],
    [0.00000004487, 5.15665153614, 732.45130231059],
    [0.00000005536, 4.79114703105, 304.84171947829],
    [0.00000004486, 5.55382992269, 440.1753304838],
    [0.00000004513, 5.63672980083, 745.03386490949],
    [0.00000005772, 2.5313939193, 32.48714639791],
    [0.00000004455, 5.63042033123, 849.7711705308],
    [0.00000005554, 4.94368042854, 493.5468520795],
    [0.00000005487, 1.39236562914, 319.06881347989],
    [0.0000000477, 3.1940179735, 991.9576961062],
    [0.00000004782, 3.88757447538, 504.8050006645],
    [0.00000005299, 4.18648503875, 200.80029162821],
    [0.00000004812, 4.61941921678, 327.9420198349],
    [0.00000004838, 1.68316643353, 774.7264474051],
    [0.00000004398, 1.57789085262, 637.2203424907],
    [0.00000004622, 1.37569567707, 43.0452116948],
    [0.00000004573, 2.8512682026, 26.58288545949],
    [0.00000005909, 0.42178511059, 313.43973918739],
    [0.00000004454, 1.49116821094, 198.72511808891],
    [0.00000004339, 3.72176257939, 153.25153291419],
    [0.00000005432, 3.43242481594, 199.040632274],
    [0.00000004814, 3.18729036913, 179.9181771628],
    [0.00000005416, 5.57721164364, 952.3401877601],
    [0.00000004417, 2.84130388631, 113.37090000971],
    [0.00000005809, 4.81933144237, 254.5967098661],
    [0.00000004499, 2.93071896451, 958.33296034749],
    [0.00000004316, 5.65077716051, 840.91002626331],
    [0.00000004591, 0.70345966091, 771.5450536674],
    [0.00000004277, 2.60125938503, 208.3894115085],
    [0.00000004839, 4.84673734698, 635.4752373515],
    [0.00000004685, 2.16436514227, 111.67397898031],
    [0.00000005613, 6.11246793909, 597.11519917759],
    [0.00000004574, 3.73747518933, 201.7634994747],
    [0.00000004511, 5.04861447966, 1044.6478941457],
    [0.00000005229, 6.16508948002, 108.96566599461],
    [0.00000004479, 2.283742842, 183.85033042589],
    [0.00000004309, 4.2856835041, 3472.9532017383],
    [0.00000004502, 4.84117827365, 262.3009576979],
    [0.00000004161, 0.42309281218, 337.08255626521],
    [0.00000004124, 2.49237479764, 440.5814673941],
    [0.00000004511, 3.18782799716, 207.426203662],
    [0.00000004109, 5.6254610266, 1140.8902459219],
    [0.00000005256, 0.36144458092, 832.0995582331],
    [0.00000004845, 3.8477641575, 226.28553421481],
    [0.00000005044, 4.92819058549, 1033.1145589148],
    [0.00000004049, 4.11923173602, 372.66733761171],
    [0.00000004077, 5.03795321512, 650.436044536],
    [0.00000004372, 4.29307292418, 225.3223263683],
    [0.00000004235, 4.38201838371, 348.8790160545],
    [0.00000004119, 1.09022528624, 2318.0796792983],
    [0.00000005657, 4.32042192539, 198.0774244275],
    [0.00000004022, 5.41283074173, 623.4663292411],
    [0.00000004173, 3.03119388396, 215.8305347819],
    [0.00000004173, 1.85843228263, 211.2552910611],
    [0.00000004084, 5.94461285605, 2847.77064439291],
    [0.00000003996, 2.34556628241, 561.6904765255],
    [0.0000000406, 3.39845797997, 228.36070775411],
    [0.00000004344, 3.41993367044, 278.2756489662],
    [0.0000000401, 1.20237501348, 283.9047232587],
    [0.00000003948, 4.14830731658, 2729.96314120569],
    [0.00000005205, 4.68217317963, 72.05647063421],
    [0.00000004634, 4.18140490995, 527.22646959241],
    [0.00000005029, 0.09918698761, 197.5012778115],
    [0.00000004736, 5.30260514224, 425.1450873301],
    [0.00000003969, 3.81127477948, 21.0968235189],
    [0.00000005443, 2.2042887529, 481.97988695381],
    [0.00000005129, 5.72715613582, 219.2201713238],
    [0.00000005129, 5.44565533795, 207.8656545192],
    [0.00000003855, 5.22645171015, 425.6181680821],
    [0.00000004014, 5.43177787536, 707.809155364],
    [0.0000000386, 4.85679865938, 512.66930719071],
    [0.00000003855, 4.44425417057, 428.0658486369],
    [0.00000003832, 1.37075793389, 668.4522794488],
    [0.00000003833, 2.96960847626, 969.86629557841],
    [0.00000003992, 0.10864564758, 248.75518725251],
    [0.00000004504, 4.89705379851, 3061.06973983091],
    [0.00000003821, 1.05865131896, 1258.6977491091],
    [0.00000003915, 1.23637523349, 969.37866061139],
    [0.00000004, 6.035641212, 49.47743513939],
    [0.00000004401, 1.19543136025, 774.98957196349],
    [0.00000003903, 2.21363155069, 379.1477451661],
    [0.00000005273, 0.72561113063, 88.35873817511],
    [0.00000004974, 1.42953521228, 604.7163811454],
    [0.0000000377, 0.09007052734, 212.17031479781],
    [0.0000000377, 4.79955563925, 214.91551104521],
    [0.00000004435, 0.50168099105, 204.97852310719],
    [0.00000003735, 4.33435972105, 1596.43025976811],
    [0.0000000369, 0.84619898753, 738.814089786],
    [0.00000003728, 0.34905244092, 407.71955324831],
    [0.00000004348, 0.29093412404, 69.12115511239],
    [0.00000004549, 1.42149182994, 491.8017469403],
    [0.0000000371, 0.78421951437, 1575.08961876571],
    [0.00000003788, 4.13635893946, 258.78949556011],
    [0.00000004244, 5.65635028403, 319.0833676949],
    [0.00000003638, 6.22572039721, 634.7244778261],
    [0.00000004782, 5.01635723372, 313.9273741544],
    [0.00000004614, 4.98407371709, 318.12015984841],
    [0.00000003611, 2.69456119616, 316.6838712499],
    [0.00000003647, 0.26596132798, 48.51422729289],
    [0.00000003812, 5.3110566153, 6276.2061204741],
    [0.00000004045, 0.06905219404, 519.15220687259],
    [0.00000003837, 0.06938395849, 28.5549931348],
    [0.00000003969, 5.57013725657, 398.5308327082],
    [0.00000004988, 1.39831832915, 105.2966372899],
    [0.00000004187, 2.87641336936, 1905.70858242391],
    [0.00000003673, 1.25158403063, 619.534175978],
    [0.00000003529, 2.53741677974, 215.50295850929],
    [0.00000004522, 4.78850933616, 229.5845480315],
    [0.00000003575, 2.06510339841, 291.76902978489],
    [0.00000004154, 5.87953687212, 721.40560204669],
    [0.00000004496, 0.57295696271, 120.74507944141],
    [0.00000003649, 3.5382633774, 444.36811617781],
    [0.00000004846, 4.94677202632, 25.61967761299],
    [0.00000004339, 5.05440665939, 609.1216151605],
    [0.00000003687, 1.40777379919, 2538.00468677009],
    [0.00000003925, 6.25927800152, 317.59889498661],
    [0.00000004658, 6.06131115428, 2641.5850959557],
    [0.00000004614, 0.83945558776, 616.07759559439],
    [0.00000003906, 2.05005363555, 525.514994348],
    [0.00000003627, 0.45858366119, 10206.4158166937],
    [0.00000003452, 4.52964007791, 62.4952430786],
    [0.00000003889, 2.25920260691, 103.81216458159],
    [0.00000004257, 1.23297991754, 72.090100529],
    [0.00000004693, 1.77733414246, 619.046541011],
    [0.00000003405, 1.51170975386, 393.70490756781],
    [0.00000003406, 5.10091194872, 102.8971408449],
    [0.00000003405, 2.20832557634, 172.0014810099],
    [0.00000004, 1.12916710018, 1048.0924124418],
    [0.00000004448, 4.58159314523, 1485.7363035817],
    [0.00000004227, 2.90784233814, 413.8242004203],
    [0.00000003578, 5.78180514444, 316.58750303031],
    [0.00000003352, 3.55976780702, 298.4764398754],
    [0.00000003398, 1.90326495607, 102.8007726253],
    [0.00000003878, 1.25593176769, 210.60759739969],
    [0.00000003282, 3.54688775335, 215.07977525651],
    [0.00000003282, 1.34273841324, 212.0060505865],
    [0.00000003262, 1.72244772023, 327.9969015891],
    [0.00000003353, 2.96079468399, 766.128427696],
    [0.00000003738, 2.23671986356, 123.2958258602],
    [0.00000003649, 3.16101908686, 610.44852130189],
    [0.00000004126, 2.78507591828, 187.5193591306],
    [0.00000003391, 5.2843804527, 541.2959970271],
    [0.00000003608, 2.57278849479, 1119.429492713],
    [0.00000003758, 4.81379904529, 101.88574888859],
    [0.00000003231, 3.11446745439, 188.270118656],
    [0.00000003787, 5.85679753021, 652.67127676971],
    [0.00000003965, 1.83861016216, 914.20715212231],
    [0.00000003735, 1.2471404761, 80.44204202221],
    [0.00000003177, 1.02908638657, 691.3468291287],
    [0.00000003187, 5.12647471004, 305.8506193071],
    [0.00000004058, 0.59959878781, 92.0638889021],
    [0.00000003123, 5.7648324255, 307.07445958451],
    [0.00000003691, 0.48718423619, 194.5323323949],
    [0.00000003467, 4.32351780506, 428.5389293889],
    [0.0000000327, 4.06613062205, 282.9078855174],
    [0.00000004132, 1.72276410779, 434.47682022211],
    [0.00000003256, 0.48979574513, 344.45922782439],
    [0.00000004289, 2.1314536783, 187.9400502559],
    [0.00000003819, 4.52428970078, 114.6978061511],
    [0.00000003049, 5.66152224756, 842.65762352999],
    [0.0000000336, 5.25154254711, 2516.66404576769],
    [0.00000003446, 1.36703927103, 305.85311143459],
    [0.00000003964, 4.57298587668, 101.62511645769],
    [0.00000003527, 5.16157036991, 496.2069809554],
    [0.00000003065, 3.38375104988, 348.3913810875],
    [0.000000035, 4.38434583704, 789.7043009321],
    [0.00000002995, 2.81665065444, 91.54262404029],
    [0.00000003701, 5.73555133647, 405.747445573],
    [0.00000003539, 0.9988812244, 233.1866328945],
    [0.00000002935, 2.61545309154, 92.55401599659],
    [0.00000003414, 6.15560691139, 331.45348197271],
    [0.00000003976, 2.17943640249, 31.2633061205],
    [0.000000031, 2.25042510426, 130.1969245399],
    [0.00000003608, 2.47118725916, 315.6724792936],
    [0.00000002909, 1.70469953307, 109.69937917751],
    [0.0000000289, 5.51370123281, 111.2008982283],
    [0.00000002917, 3.43410376988, 357.4770357636],
    [0.00000003278, 1.66981893495, 126.231141382],
    [0.00000002952, 2.02096060057, 93.28772917949],
    [0.00000002859, 3.43547714123, 181.56270856549],
    [0.00000003008, 4.1019718721, 434.70631488571],
    [0.00000002925, 3.52591083414, 3796.4586183957],
    [0.00000003751, 6.13610992998, 624.6756153035],
    [0.00000003658, 2.79714159952, 268.68079151581],
    [0.00000003572, 1.3711264981, 851.9557265272],
    [0.00000002923, 5.61293728889, 252.4121538697],
    [0.00000003162, 5.36858469376, 77.7191748215],
    [0.00000003903, 4.38444688669, 1066.2516597065],
    [0.00000003528, 2.16332343815, 834.7933170038],
    [0.00000003311, 0.11299799349, 212.092070108],
    [0.00000003007, 5.67168406954, 699.94484883781],
    [0.00000002914, 2.44010514833, 625.1632502705],
    [0.00000002826, 2.75759654641, 71.8440223131],
    [0.00000002804, 4.40192840756, 425.40571976101],
    [0.00000002779, 4.75841138753, 629.846163059],
    [0.00000003204, 0.11083820522, 31.24875190549],
    [0.00000003277, 4.40244200779, 232.5534934481],
    [0.00000003564, 0.55121382371, 38.11622069041],
    [0.00000003345, 4.69701413463, 77.4730966056],
    [0.00000003005, 1.85424910273, 135.0922856495],
    [0.00000003542, 2.10432417506, 239.5664667124],
    [0.00000002893, 2.3056780956, 3899.5513926143],
    [0.00000003544, 0.37526043126, 282.20780222929],
    [0.00000002804, 5.26877747316, 428.27829695801],
    [0.0000000285, 5.4187308494, 177.6305553024],
    [0.00000002737, 1.2188473875, 626.126458117],
    [0.00000002722, 3.73879814102, 214.018485801],
    [0.00000002716, 3.09434225481, 620.4973838245],
    [0.00000002818, 2.46590151702, 354.508090347],
    [0.00000003749, 5.48742211953, 145.6624130339],
    [0.00000003118, 5.71514726491, 3376.9739745205],
    [0.00000002902, 5.33945085702, 52.934015523],
    [0.00000003, 3.29647513212, 206.9049388002],
    [0.00000002965, 1.58377397053, 42.5696388153],
    [0.00000002885, 4.81351175785, 418.97770183331],
    [0.00000002693, 5.92886276832, 433.2047958349],
    [0.00000003088, 6.09210931343, 2957.48933064529],
    [0.00000002922, 2.2459120863, 1063.0702659688],
    [0.00000003407, 6.14849506249, 499.175926372],
    [0.0000000327, 2.70578228663, 924.28964453971],
    [0.00000003462, 0.16426971475, 182.78405671541],
    [0.00000003056, 5.41338556991, 179.8151112988],
    [0.00000002751, 3.55568779756, 322.26476143261],
    [0.00000003461, 2.20556239264, 60.3106870822],
    [0.00000003254, 2.14594096655, 87.87110320809],
    [0.0000000332, 2.19525628405, 122.9803116751],
    [0.00000003628, 2.76762924657, 239.1457755871],
    [0.00000002722, 1.90912932797, 644.33388949151],
    [0.00000002866, 2.73211415857, 315.41184686271],
    [0.00000003289, 3.51215591822, 685.7177548362],
    [0.00000002598, 0.5708523252, 151.5039356475],
    [0.00000002931, 4.99737516135, 7.83293736379],
    [0.00000002624, 1.60917289432, 311.2190611687],
    [0.00000002667, 3.91979165512, 1080.9663886751],
    [0.00000002603, 4.71971708944, 508.7371539276],
    [0.00000002559, 5.36447720972, 639.3903442721],
    [0.00000002562, 4.26277399169, 827.67977000299],
    [0.00000002581, 2.63019535055, 159.2081834793],
    [0.00000002754, 2.83456084033, 287.83687652179],
    [0.00000002531, 4.86434568068, 1048.8431719672],
    [0.00000002912, 3.83544556347, 1382.64352936309],
    [0.00000002686, 0.15925446852, 643.0618651043],
    [0.00000002508, 1.97837844361, 297.8857390444],
    [0.00000002488, 3.20204119275, 95.47228517591],
    [0.00000003158, 0.65282282373, 671.8967977449],
    [0.00000002864, 1.21917033622, 453.66871130251],
    [0.00000002518, 3.93587358039, 2626.8703669871],
    [0.00000002793, 2.94738171561, 208.8624922605],
    [0.0000000266, 3.15325492704, 443.5167829159],
    [0.00000002576, 0.14454041746, 952.8639447494],
    [0.00000002986, 1.55320502134, 105.7842722569],
    [0.00000003018, 5.15417052486, 141.9427080919],
    [0.00000002912, 4.22692425727, 167.3331224364],
    [0.0000000243, 1.26440767301, 235.68919520349],
    [0.00000003277, 4.17742655482, 1055.95671896799],
    [0.00000002469, 0.43788807135, 213.1034620643],
    [0.0000000243, 5.16272782845, 112.4101842907],
    [0.00000002646, 3.36163487366, 312.21589891],
    [0.00000002465, 2.87544505422, 205.8935468439],
    [0.00000002655, 5.30662457895, 440.85665404],
    [0.0000000237, 2.29846468477, 64.7159210973],
    [0.00000002389, 4.38325797699, 85.58348134769],
    [0.00000002369, 0.90337052069, 220.8689082434],
    [0.00000002369, 0.84466299231, 206.2169175996],
    [0.00000002493, 2.2779376959, 388.2213377547],
    [0.00000002974, 2.14395876897, 531.73476947149],
    [0.00000002491, 3.11641893226, 123.78346082721],
    [0.00000002347, 3.9429194492, 3046.3550108623],
    [0.00000003237, 4.15223587316, 338.72708766791],
    [0.0000000252, 6.17195337179, 338.0457641117],
    [0.00000002377, 1.72451258399, 628.6077685666],
    [0.00000002701, 5.31018762949, 300.854684461],
    [0.00000002653, 0.6183905939, 56.8661687861],
    [0.00000002732, 4.84630107056, 244.30176912761],
    [0.00000002275, 3.01865971091, 4002.64416683289],
    [0.00000002952, 2.31378455663, 645.77017809],
    [0.00000002509, 4.52000559703, 125.42799222991],
    [0.00000002253, 2.2268916345, 310.41591201661],
    [0.00000002632, 5.22086889296, 416.79314583689],
    [0.00000002307, 5.65143265211, 3164.1625140495],
    [0.00000002532, 5.13544500097, 90.3187837629],
    [0.00000002434, 2.93786049007, 769.0973731126],
    [0.00000002819, 4.33639017787, 34.9202727377],
    [0.00000002827, 5.81289553813, 782.59075393131],
    [0.00000002409, 6.23011689079, 621.4942215658],
    [0.00000002533, 5.04860084233, 631.54308408841],
    [0.00000002542, 2.08891387679, 176.63371756111],
    [0.00000002171, 0.6253355984, 1891.4814884223],
    [0.00000002552, 1.71107443815, 12566.3955174663],
    [0.00000002811, 1.38980153585, 641.62557650581],
    [0.0000000291, 4.77695576046, 330.9658470057],
    [0.00000002345, 5.85946991886, 2104.7805838603],
    [0.00000002188, 5.37105971182, 1457.2821155785],
    [0.00000002591, 0.63794997691, 170.41394243761],
    [0.00000002615, 0.54729482995, 143.6903053586],
    [0.00000002434, 0.5532824448, 183.486632131],
    [0.00000003003, 0.06003858313, 739.30172475301],
    [0.00000002177, 2.60567333935, 67.6366824041],
    [0.00000002774, 1.24195655197, 1048.58004740881],
    [0.00000002462, 5.75946440696, 247.2707145442],
    [0.00000002386, 4.37257867425, 430.98660994371],
    [0.00000002988, 4.23764191275, 1802.12817323829],
    [0.0000000281, 5.72676129521, 140.721359942],
    [0.00000002255, 0.261655438, 6681.46867088311],
    [0.00000002483, 5.73996136268, 375.9517972134],
    [0.00000002123, 0.34275870459, 610.93615626891],
    [0.00000002154, 1.01602323535, 444.1074837469],
    [0.00000002497, 0.09006336245, 17.91542978119],
    [0.00000002073, 5.0815403581, 218.4719039259],
    [0.00000002063, 4.77672198594, 616.56523056141],
    [0.0000000225, 5.37793469323, 366.2875037938],
    [0.0000000275, 1.30459159563, 485.63685357099],
    [0.00000002252, 2.78563182902, 49.26498681829],
    [0.00000002813, 0.73865142296, 837.4534458797],
    [0.00000002062, 0.67146633927, 2634.47154895491],
    [0.00000002822, 3.09009791052, 162.6527017754],
    [0.00000002611, 0.55025625817, 927.5911504839],
    [0.00000002212, 5.6446055133, 193.4115579815],
    [0.00000002182, 5.06007050383, 335.38563523581],
    [0.00000002403, 2.26991708124, 452.4448710251],
    [0.00000002564, 3.29999345582, 427.73578023681],
    [0.00000002111, 5.244199599, 422.6974067753],
    [0.00000002308, 3.09970342539, 155.2236405895],
    [0.00000002054, 1.10667438189, 883.5513617802],
    [0.00000002713, 0.18767262914, 6.3484646555],
    [0.00000002692, 2.83455718298, 1040.97886544099],
    [0.00000002007, 3.46492872207, 529.1840230527],
    [0.00000002282, 4.8262609747, 173.9254045754],
    [0.00000002783, 3.9770873947, 165.3610147611],
    [0.00000002346, 5.96960035551, 447.448936179],
    [0.00000002376, 1.1075371131, 945.48727319021],
    [0.00000002081, 2.10189023227, 90.57941619379],
    [0.00000002489, 5.97615262196, 2487.1722274643],
    [0.00000002124, 0.24199244027, 133.34468838281],
    [0.00000002, 1.71637966221, 419.1926422819],
    [0.00000001998, 1.38456498657, 518.62844988331],
    [0.00000001969, 0.87882959914, 530.68554210351],
    [0.00000002467, 1.16140871474, 429.81095377611],
    [0.00000001955, 2.64714107906, 105.03351273151],
    [0.00000002054, 4.07410590523, 3789.34507139489],
    [0.00000002425, 4.28534276753, 180.40581212981],
    [0.00000001995, 5.64222397445, 409.5765329721],
    [0.00000002035, 4.31478927336, 437.40007365639],
    [0.0000000199, 1.20144466178, 2854.3965564267],
    [0.00000002449, 3.51585269206, 213.00709384469],
    [0.00000002354, 5.70604510094, 657.4065791849],
    [0.00000002466, 1.21196311089, 421.6885069465],
    [0.00000001932, 3.95236750027, 1062.80714141041],
    [0.00000002448, 6.06475548762, 205.98991506349],
    [0.00000001912, 4.86893514364, 419.28901050149],
    [0.00000002647, 6.01524298699, 747.1660312792],
    [0.00000001873, 5.39710784329, 345.08987514331],
    [0.00000002199, 4.03618137033, 681.7856015731],
    [0.00000002386, 4.15979534815, 25234.46294233869],
    [0.00000001886, 4.74856771776, 1096.8504572182],
    [0.000000022, 3.67398938648, 784.28767496071],
    [0.00000001859, 1.27634409007, 535.6669227346],
    [0.00000002123, 4.59517360138, 418.2776185452],
    [0.00000002326, 5.90565481193, 166.58485503849],
    [0.00000002007, 6.24913643216, 527.01402127131],
    [0.00000002162, 2.02542462393, 420.2040342382],
    [0.00000002185, 3.86722734363, 110.189506272],
    [0.00000002564, 0.08752711773, 425.9482364822],
    [0.00000001976, 3.27975163184, 102.3276918733],
    [0.00000001951, 3.80946898193, 168.2963302829],
    [0.00000001965, 2.72529355918, 39.9162075838],
    [0.00000001953, 4.3477072576, 116.07921299541],
    [0.00000002118, 0.16994068938, 409.4335206202],
    [0.00000002542, 0.28051618477, 355.02935520881],
    [0.00000002294, 5.31857052688, 181.08713568601],
    [0.00000002378, 0.97161359133, 385.3005764479],
    [0.00000001807, 4.30830792029, 275.5818901955],
    [0.00000001833, 2.25943126416, 267.8776423637],
    [0.00000002302, 5.74355401552, 43.5328466618],
    [0.00000002098, 0.08769001353, 253.16042126761],
    [0.00000002063, 5.99370738678, 177.36743074401],
    [0.00000002261, 1.40921864289, 635.94831810351],
    [0.00000002208, 0.06326079599, 1194.21109128031],
    [0.00000002053, 3.72658018441, 103.37022159689],
    [0.00000001966, 6.03016819317, 835.5440765292],
    [0.00000002346, 0.23030073846, 222.6165055101],
    [0.00000001855, 3.60752296582, 23.1383671634],
    [0.00000001855, 3.60752296582, 22.6507321964],
    [0.00000002017, 4.33634384614, 243.599193712],
    [0.00000002346, 5.76125045506, 2957.9769656123],
    [0.00000001781, 1.54883325886, 220.9170923532],
    [0.00000001781, 0.19920025414, 206.1687334898],
    [0.00000001851, 2.90153472874, 1107.8961574821],
    [0.00000001906, 0.30653739166, 586.06949891369],
    [0.00000002083, 6.04860095971, 1037.7974717033],
    [0.00000002271, 6.07739006315, 234.0379661564],
    [0.00000002271, 5.09542141062, 193.0478596866],
    [0.00000002373, 5.71475634706, 281.4234128091],
    [0.00000001873, 1.44953658425, 1084.0047700609],
    [0.00000002113, 4.95085993537, 671.1605924345],
    [0.00000001854, 5.40160586575, 614.38067456499],
    [0.00000001766, 0.87455416846, 2.6769438233],
    [0.00000001774, 3.12295108906, 220.39582749141],
    [0.00000001774, 4.90826773112, 206.6899983516],
    [0.00000002018, 2.80222834013, 250.45210828191],
    [0.00000001877, 0.8674687852, 35.18090516859],
    [0.00000002293, 6.18682503815, 912.722679414],
    [0.00000001775, 5.64171842529, 228.7332147696],
    [0.00000001775, 2.38950039489, 198.3526110734],
    [0.00000001908, 4.75541799866, 3377.4616094875],
    [0.00000001924, 0.05325859053, 534.1275682721],
    [0.0000000174, 3.73739180897, 3362.74688051889],
    [0.00000002154, 0.40104075464, 666.96780674051],
    [0.00000002288, 0.41986539828, 103.597224133],
    [0.00000001725, 5.50474519843, 132.85705341579],
    [0.00000001785, 4.98048380603, 346.43133549971],
    [0.00000002259, 2.6098062646, 700.4204217173],
    [0.00000001692, 5.01579761567, 212.5340130927],
    [0.00000001721, 5.21316754257, 306.34074640161],
    [0.00000002004, 4.26613787249, 256.6718834054],
    [0.00000002083, 2.24513842982, 5216.33655531789],
    [0.00000002234, 5.54983389111, 799.36859435169],
    [0.0000000198, 2.56001945144, 451.97179027311],
    [0.00000002071, 3.58320191234, 549.8940167362],
    [0.00000002071, 2.05739621883, 45.49040012211],
    [0.00000001998, 0.36777686598, 1171.63205578549],
    [0.00000002007, 0.88372371587, 1364.4842820984],
    [0.00000001836, 2.92694247168, 644.8069702435],
    [0.00000001687, 5.33007261538, 520.37355502251],
    [0.00000001705, 2.31286181244, 2222.1004520805],
    [0.0000000208, 1.45709625903, 587.450905758],
    [0.00000002061, 5.09975785401, 337.5581291447],
    [0.00000001674, 2.74515959016, 207.6386519831],
    [0.00000001723, 1.32784221906, 6290.4332144757],
    [0.0000000176, 2.25500156442, 12.28635548869],
    [0.00000001697, 4.20915600472, 552.34169729099],
    [0.00000001676, 2.04112487415, 41.08516610701],
    [0.00000001715, 2.13305723286, 133.86844537209],
    [0.00000001707, 2.05213240355, 98.6012892869],
    [0.00000001846, 0.24646975759, 5849.1202946311],
    [0.00000001707, 1.11053782306, 895.0846970111],
    [0.00000001821, 1.68122578438, 9779.32999085069],
    [0.00000002189, 0.22703640405, 66.9486612035],
    [0.00000002014, 5.22602330033, 546.71262299849],
    [0.00000001781, 1.68206567806, 9772.21644384989],
    [0.00000001685, 2.7720966058, 10220.6429106953],
    [0.00000001942, 0.62509516046, 246.68001371321],
    [0.00000002001, 2.79560236728, 3.94896821049],
    [0.00000001626, 5.14783884729, 624.1543504417],
    [0.00000001942, 3.67591631329, 9146.54625153749],
    [0.00000001802, 2.72673271293, 1389.3509394536],
    [0.00000001613, 3.84799104836, 1144.0716396596],
    [0.0000000216, 6.02089758599, 336.5949212982],
    [0.0000000209, 0.77231653699, 629.35852809199],
    [0.00000001968, 3.13421198037, 118.3144452291],
    [0.00000001822, 5.1974273947, 1009.22317149361],
    [0.00000001611, 0.79920795326, 347.16754081009],
    [0.00000001728, 1.00799863461, 1091.3814416201],
    [0.00000002055, 3.93160223679, 1372.3485886246],
    [0.00000001569, 4.53671161147, 122.71967924421],
    [0.00000001542, 5.32956278183, 1166.1630401874],
    [0.00000001878, 5.27282154972, 133.82026126229],
    [0.00000001628, 3.80471189414, 46.22660543249],
    [0.00000001987, 5.87487529487, 913.5070688342],
    [0.00000001542, 0.20693930936, 551.3448595497],
    [0.00000001643, 4.14805608546, 196.3805033981],
    [0.00000001715, 5.05123310391, 709.29362807231],
    [0.00000001803, 3.56272450751, 58.0754548485],
    [0.0000000162, 0.62227051964, 700.2079733962],
    [0.00000001584, 5.2841818117, 3767.4544350593],
    [0.00000002027, 3.9180733234, 2118.5200428949],
    [0.0000000166, 4.88325679293, 318.43567403349],
    [0.00000001695, 3.99389886352, 327.19375243699],
    [0.00000001617, 2.39206154532, 83.6234357599],
    [0.00000001522, 5.52616009652, 406.39513923441],
    [0.00000001847, 2.06358167839, 488.6057989876],
    [0.00000001505, 4.00358265141, 447.28887748461],
    [0.00000001747, 0.0310239212, 173.6984020393],
    [0.00000001511, 2.76524724862, 414.09938706621],
    [0.00000001932, 1.42317332409, 40.59753113999],
    [0.00000001512, 0.91625215222, 1748.2810787631],
    [0.00000001775, 2.24504797682, 2707.58486990309],
    [0.0000000183, 0.63475720612, 259.7527034066],
    [0.00000001574, 3.93642970138, 322.3678272966],
    [0.00000001477, 2.05303400646, 355.2418035299],
    [0.00000001498, 1.98604024579, 174.9367965317],
    [0.00000001487, 4.04993820708, 141.4550731249],
    [0.00000001676, 5.4378330885, 3693.36584417709],
    [0.00000001461, 1.38524899881, 105.13657859549],
    [0.00000001692, 3.46209472083, 679.4979797127],
    [0.00000001835, 5.85414378465, 245.99869015701],
    [0.00000001449, 5.42328914768, 1159.0494931866],
    [0.00000001661, 1.7224528989, 736.59590389479],
    [0.00000001443, 3.36134760735, 466.5143984598],
    [0.00000001476, 5.38971328268, 3480.5543837061],
    [0.00000001645, 5.17910426695, 249.71839509901],
    [0.00000001496, 3.22754175149, 77623.56832092509],
    [0.0000000189, 3.64866692511, 764.6439549877],
    [0.0000000148, 3.14944647582, 262.77653057739],
    [0.00000001937, 3.473389533, 757.5640378817],
    [0.00000001587, 0.32048665561, 6.9179136271],
    [0.00000001683, 4.01550009219, 6503.7323099137],
    [0.0000000177, 5.08423811097, 482.5011518156],
    [0.00000001735, 2.28799872431, 2435.3995475185],
    [0.00000001457, 3.01927816891, 256.18424843839],
    [0.00000001471, 0.70642591223, 1453.08683775701],
    [0.00000001613, 1.78409994223, 271.8621852535],
    [0.00000001848, 2.55365760167, 419.94090967981],
    [0.00000001954, 4.83592161734, 145.387226388],
    [0.00000001662, 0.44336441806, 25454.87558477749],
    [0.0000000142, 6.1195551687, 1354.18934135989],
    [0.0000000139, 0.11880365257, 544.7525774107],
    [0.00000001679, 5.97438658773, 285.1431177511],
    [0.00000001607, 0.73844026178, 544.2649424437],
    [0.00000001536, 5.89479692757, 3273.8812003019],
    [0.00000001536, 5.89479692757, 3274.36883526891],
    [0.00000001587, 5.49922746524, 148.5831743407],
    [0.00000001794, 2.66160697296, 754.5950924651],
    [0.00000001407, 0.85219523429, 316.1144222783],
    [0.00000001658, 2.48037578229, 415.0625949127],
    [0.00000001512, 4.28907569036, 428.4865397622],
    [0.00000001501, 6.1875034118, 5746.0275204125],
    [0.00000001696, 2.90084876328, 59.038662695],
    [0.0000000159, 0.23710525653, 349.6127292374],
    [0.00000001827, 0.61806717369, 230.3207533419],
    [0.00000001891, 5.00801645038, 1165.6392831981],
    [0.00000001759, 4.58582597435, 200.27902676641],
    [0.00000001759, 3.44539284583, 226.80679907661],
    [0.00000001677, 4.23577119544, 50.15875869559],
    [0.00000001384, 4.27737882618, 1176.9456158929],
    [0.000000016, 5.43870126795, 10433.9420061333],
    [0.00000001491, 1.31312182045, 9676.23721663209],
    [0.000000014, 0.26007468679, 1950.5344739372],
    [0.00000001334, 0.72637373445, 301.65783361311],
    [0.00000001377, 0.8642851762, 243.29037717131],
    [0.00000001377, 4.02534099039, 183.79544867171],
    [0.00000001454, 3.28359870251, 330.3751461747],
    [0.00000001421, 4.52961540751, 469.9709788434],
    [0.00000001426, 3.01357344337, 934.4415729263],
    [0.00000001356, 5.87449410633, 210.1345166477],
    [0.00000001314, 2.71429002268, 415.04804069769],
    [0.00000001338, 3.51731603639, 118.6299594142],
    [0.00000001453, 0.57533096444, 679.8134938978],
    [0.0000000147, 3.81098724259, 321.3015535861],
    [0.00000001314, 2.0878397212, 878.08234618209],
    [0.00000001715, 6.08299477871, 79.43065006591],
    [0.00000001305, 2.73772701133, 238.18505986809],
    [0.00000001382, 0.52411582569, 718.8548556279],
    [0.00000001464, 1.92663592308, 397.9001853893],
    [0.00000001758, 3.53136981753, 452.70550345601],
    [0.00000001356, 4.562569302, 280.9357778421],
    [0.0000000179, 2.61933789345, 1357.3707350976],
    [0.00000001578, 5.37892573514, 383.5529791812],
    [0.00000001464, 4.41309699814, 360.1371646395],
    [0.00000001375, 0.61137430521, 535.56385687061],
    [0.0000000162, 0.47405441337, 109.0687318586],
    [0.00000001663, 4.95313251291, 102.73708215049],
    [0.00000001314, 0.02379514725, 1670.5812110165],
    [0.00000001452, 0.95390444904, 316.896319571],
    [0.00000001302, 4.0974972738, 116.6699138264],
    [0.00000001421, 2.52300558725, 166.84548746939],
    [0.00000001339, 2.72026084734, 5863.3473886327],
    [0.00000001685, 6.07730679616, 214.53975066279],
    [0.00000001458, 3.04961044313, 9352.73179997469],
    [0.00000001341, 0.47332489447, 1183.16539101641],
    [0.000000013, 3.88742356206, 120.6020670895],
    [0.00000001281, 4.57888575454, 1108.3837924491],
    [0.00000001652, 5.63517331024, 165.8486497281],
    [0.00000001259, 0.41488838005, 2950.8634186115],
    [0.00000001508, 1.65590855031, 763.1931121742],
    [0.00000001251, 0.56339346105, 1055.2059594426],
    [0.00000001416, 0.73841384971, 1063.55790093581],
    [0.00000001273, 0.60463815018, 2207.8733580789],
    [0.00000001755, 0.25702827395, 557.75832326239],
    [0.00000001665, 0.62988003125, 163.82166029861],
    [0.0000000133, 2.6178497834, 156.02678974161],
    [0.00000001472, 3.64179989725, 346.1561488538],
    [0.00000001472, 3.64179989725, 346.64378382081],
    [0.00000001283, 2.09085692852, 4215.94326227089],
    [0.00000001564, 1.45141699498, 3391.68870348911],
    [0.00000001232, 2.01286113512, 767.1252654373],
    [0.00000001339, 3.55159228628, 419.7620912535],
    [0.00000001471, 5.32263840566, 2693.3577759015],
    [0.00000001265, 3.33952901594, 212.3045184291],
    [0.00000001355, 3.06105542076, 418.71956152989],
    [0.00000001236, 1.64676624453, 409.6795988361],
    [0.00000001263, 4.89869307825, 2090.06585489169],
    [0.0000000158, 4.87533968051, 1477.8383671607],
    [0.0000000131, 5.18861487187, 1012.66768978969],
    [0.00000001245, 5.0829442756, 748.9660181726],
    [0.00000001565, 3.90450910087, 1268.9926898476],
    [0.00000001267, 5.32574708258, 115.11600514891],
    [0.00000001279, 1.12013287366, 217.9481469366],
    [0.00000001279, 0.62790063934, 209.13767890641],
    [0.00000001237, 3.25551290814, 4112.8504880523],
    [0.00000001208, 1.32712565413, 116.12739710521],
    [0.00000001358, 4.00471985016, 973.7984488415],
    [0.00000001406, 5.51451351576, 959.45373476091],
    [0.00000001365, 0.53588394734, 988.28866740149],
    [0.00000001189, 4.92462455483, 1378.3052391897],
    [0.000000012, 0.49702267118, 614.868309532],
    [0.00000001537, 3.54508824305, 170.72945662269],
    [0.00000001449, 3.08273741016, 1020.2688717575],
    [0.00000001181, 1.33018054312, 372.77040347569],
    [0.00000001227, 5.69576717158, 2421.1724535169],
    [0.00000001504, 2.57217010618, 2810.6776441217],
    [0.00000001191, 1.4957990758, 487.3965129252],
    [0.00000001601, 1.72354458106, 1151.1851866604],
    [0.00000001207, 0.96898843462, 3170.78842608329],
    [0.00000001288, 4.69433760178, 3149.44778508089],
    [0.00000001277, 0.2765564572, 217.24806364849],
    [0.00000001276, 2.61558896767, 94.7722018878],
    [0.00000001451, 1.05411548466, 514.95692905111],
    [0.00000001451, 1.05411548466, 514.46929408409],
    [0.00000001235, 3.4329720182, 173.43776960839],
    [0.00000001353, 3.76027139434, 530.0466571627],
    [0.00000001464, 0.02257079027, 746.15463932291],
    [0.00000001246, 5.61078961339, 424.8699006842],
    [0.00000001236, 2.50843841662, 1248.3857620281],
    [0.00000001279, 0.03215301642, 703.38936713389],
    [0.00000001236, 4.30746328208, 538.8483164723],
    [0.00000001234, 4.16726551204, 416.3200650849],
    [0.00000001161, 1.82750814245, 313.7149258333],
    [0.00000001414, 1.60384951308, 2648.6986429565],
    [0.00000001177, 4.62142425135, 643.5856220936],
    [0.00000001187, 1.03828381736, 1394.9800137461],
    [0.00000001173, 1.60433079541, 331.6135406671],
    [0.00000001176, 2.90358611485, 252.1490293113],
    [0.00000001245, 4.65509615846, 293.74113746021],
    [0.00000001187, 3.72181414929, 4105.7369410515],
    [0.00000001274, 0.56033904615, 165.10038233019],
    [0.00000001391, 0.02309515967, 5860.16599489499],
    [0.00000001365, 5.22737241965, 674.0813537413],
    [0.00000001165, 1.16402753194, 107.0417424291],
    [0.00000001169, 1.54612792835, 104.29979954861],
    [0.0000000128, 2.60261684467, 60.79832204921],
    [0.0000000147, 0.46274502064, 1147.7406683643],
    [0.00000001243, 0.16760981697, 945.7503977486],
    [0.00000001211, 2.29834110056, 271.05903610141],
    [0.00000001378, 4.48082815431, 880.26690217851],
    [0.00000001141, 4.65662492035, 1365.23504162379],
    [0.00000001452, 3.82619301322, 670.2522663422],
    [0.00000001372, 3.12283015772, 5852.3016883688],
    [0.00000001152, 5.71979516304, 253.2153030218],
    [0.00000001145, 5.20900865265, 3796.94625336271],
    [0.00000001147, 5.23246594483, 2048.1582325577],
    [0.00000001139, 3.77606446333, 227.81819103291],
    [0.00000001139, 4.25515435685, 199.26763481011],
    [0.0000000135, 3.52660754473, 25440.64849077589],
    [0.00000001152, 5.11322028459, 475.6000531359],
    [0.00000001377, 0.50068712612, 660.851097481],
    [0.00000001324, 3.36678513643, 101.3644840268],
    [0.00000001189, 2.65397891656, 1383.9343134822],
    [0.00000001403, 3.67339271391, 1699.0353990197],
    [0.00000001177, 1.82821053485, 303.3023650158],
    [0.00000001164, 5.16928967595, 1773.6739852351],
    [0.00000001179, 5.67584375514, 272.33775813299],
    [0.00000001228, 6.14893570078, 91.70019060721],
    [0.00000001431, 3.53241753707, 1467.3139317586],
    [0.00000001142, 3.42129382875, 656.9189442179],
    [0.00000001157, 3.17352979808, 469.6434025708],
    [0.00000001157, 0.03193714449, 470.1310375378],
    [0.00000001459, 5.5911885459, 1128.7782719475],
    [0.00000001199, 3.3281550303, 384.5161870277],
    [0.0000000136, 6.23249225628, 1560.3748897971],
    [0.00000001399, 0.26308817006, 1243.98302014049],
    [0.00000001154, 3.90218563691, 5539.8419719753],
    [0.0000000129, 5.88751484616, 1403.5780334552],
    [0.00000001426, 0.71297202771, 701.6924461045],
    [0.00000001402, 5.49844037291, 1112.3159457122],
    [0.00000001097, 4.39996766325, 735.6808801581],
    [0.00000001431, 4.14934397552, 388.9696051526],
    [0.00000001187, 1.09475241758, 6599.7115371315],
    [0.00000001093, 6.27482624765, 427.317581239],
    [0.00000001537, 2.26997973747, 2854.8841913937],
    [0.00000001417, 0.74675814459, 25557.96835899609],
    [0.00000001238, 4.45159537738, 559.94287925881],
    [0.00000001473, 1.81109515353, 2751.79141717511],
    [0.00000001452, 2.08713835729, 228.0331314815],
    [0.00000001516, 5.88783767141, 560.46663624809],
    [0.00000001103, 4.63060901499, 531.9405201482],
    [0.00000001301, 1.44654929805, 9790.37569111459],
    [0.00000001099, 5.99645868304, 527.929045008],
    [0.00000001256, 1.98238644435, 877.8192216237],
    [0.0000000125, 3.85798606392, 1226.45442019471],
    [0.00000001113, 3.14740146804, 124.18959773749],
    [0.00000001072, 4.02039116236, 206.2693072263],
    [0.00000001072, 4.01082765782, 220.8165186167],
    [0.00000001335, 0.17870194529, 121.0082039998],
    [0.00000001282, 4.54628381109, 9782.51138458839],
    [0.00000001072, 0.62535496972, 220.4964012279],
    [0.00000001072, 1.12267854328, 206.5894246151],
    [0.00000001303, 3.69503246823, 1096.48675892331],
    [0.00000001397, 5.45476565968, 1461.6848574661],
    [0.00000001085, 2.72676641341, 379.8839504765],
    [0.0000000117, 2.12202833962, 705.1008423783],
    [0.00000001054, 3.95603977178, 155.53915477459],
    [0.00000001405, 4.62229591705, 5436.7491977567],
    [0.00000001097, 4.60268688107, 476.56326098241],
    [0.00000001241, 5.1129587839, 2833.0559154243],
    [0.00000001288, 0.42374008522, 1340.8053429983],
    [0.00000001129, 3.07767826513, 1222.52226693161],
    [0.0000000129, 0.79377005415, 1082.2596649217],
    [0.00000001166, 5.05925238169, 2467.6428764329],
    [0.00000001299, 5.43314879441, 2509.5504987669],
    [0.00000001321, 6.10687737458, 9366.9588939763],
    [0.00000001051, 4.35040361644, 959.97749175019],
    [0.00000001051, 4.35040361644, 960.4651267172],
    [0.00000001211, 2.8099152349, 304.1055141679],
    [0.00000001052, 3.86792125865, 645.5577297689],
    [0.00000001127, 0.31244064224, 78477.2523376441],
    [0.00000001258, 4.40841524052, 5867.27954189579],
    [0.00000001073, 2.88134377608, 328.4845365561],
    [0.0000000129, 4.4882158546, 71.5688356672],
    [0.00000001053, 4.63251123701, 795.43644108859],
    [0.00000001329, 5.03792511567, 2740.7457169112],
    [0.00000001352, 1.20612298463, 1127.50624756031],
    [0.00000001032, 5.79901826701, 774.25336665311],
    [0.00000001421, 0.04765558923, 398.38782035631],
    [0.00000001302, 0.47222793041, 476.07562601539],
    [0.00000001018, 1.5257756341, 135.7923689376],
    [0.0000000124, 0.29711496611, 761.98382611181],
    [0.00000001072, 4.40309497596, 1257.9469895837],
    [0.00000001044, 0.40386153641, 304.36614659881],
    [0.00000001166, 3.33113338762, 613.6299150396],
    [0.00000001025, 0.01753129634, 121.59890483079],
    [0.00000001321, 4.43670480817, 323.48860171],
    [0.00000001279, 4.51516906631, 203.72105293501],
    [0.00000001279, 3.51604975387, 223.36477290801],
    [0.00000001145, 6.17371704189, 519.88592005549],
    [0.00000001018, 2.91596221445, 640.8918633229],
    [0.00000001389, 5.24370269936, 1115.7604640083],
    [0.00000001343, 3.88682161226, 108.26558270649],
    [0.00000001195, 0.85808512318, 99.1438060081],
    [0.00000001008, 4.30738828647, 102.5883243042],
    [0.00000001143, 5.21944528509, 256.3443071328],
    [0.00000001019, 4.91718332635, 6247.26929803929],
    [0.0000000125, 5.68253927507, 759.0148806952],
    [0.00000001, 2.13999178433, 1939.4887736733],
    [0.0000000111, 1.66567300271, 1397.9489591627],
    [0.0000000117, 1.26049852836, 7.3909943791],
    [0.00000001196, 4.77831019397, 46.8173062635],
    [0.00000001151, 2.51852068637, 76.0222537921],
    [0.00000001005, 5.76224230474, 690.8591941617],
    [0.00000001316, 1.32295596105, 475.11241816889],
    [0.00000000995, 4.20379456134, 99.92819542829],
    [0.00000001197, 1.26595437757, 1392.5323331913],
    [0.0000000111, 2.98882017733, 523.2968084568],
    [0.00000001088, 4.97175423832, 824.23525170691],
    [0.00000001015, 1.4722877236, 634.98760238449],
    [0.00000001012, 1.77286703845, 689.86235642041],
    [0.00000001381, 3.3044223356, 97.4323307637],
    [0.00000001276, 4.48973341413, 465.7112493077],
    [0.00000001233, 5.35220662775, 1546.2908081474],
    [0.0000000116, 6.23737046615, 152.9884083558],
    [0.00000001247, 3.58622778979, 2434.9119125515],
    [0.00000001201, 3.09828888291, 528.71094230071],
    [0.00000001045, 1.49017361423, 608.0008407471],
    [0.00000001034, 2.46164938759, 540.49284787499],
    [0.00000000988, 2.46330736551, 967.8941879031],
    [0.00000000973, 3.932736257, 173.38288785421],
    [0.00000001081, 2.34160070624, 560.9397170001],
    [0.00000001105, 0.59883609919, 227.7218228133],
    [0.00000001105, 1.14919741381, 199.3640030297],
    [0.00000001022, 0.9965567052, 599.40282103799],
    [0.00000001176, 5.83186908907, 9797.4892381154],
    [0.00000001174, 0.61580453745, 1680.87615175499],
    [0.0000000098, 3.06958429681, 944.99963822319],
    [0.00000001194, 4.57575815213, 725.0746307514],
    [0.00000001045, 3.1724671074, 343.49601997789],
    [0.00000001227, 3.94543045845, 1973.37663399041],
    [0.00000001185, 2.30979572901, 773.24197469681],
    [0.00000001222, 3.21080779639, 776.2109201134],
    [0.0000000098, 2.09680719136, 524.78128116509],
    [0.00000001285, 2.5132953491, 6.82154540749],
    [0.00000001225, 2.82333756383, 25344.66926355809],
    [0.00000000985, 3.52739874813, 913.24394427581],
    [0.00000000995, 0.7922735027, 557.2827503829],
    [0.00000000983, 1.11328788816, 550.3816517032],
    [0.00000001005, 5.19307115578, 301.17019864609],
    [0.00000001208, 4.61381839173, 2597.3785486837],
    [0.0000000095, 2.91396525108, 568.5408989679],
    [0.0000000122, 4.63270249547, 1458.71591204951],
    [0.00000001171, 2.39322957185, 2538.4923217371],
    [0.00000001155, 1.80072310652, 308.7713806139],
    [0.00000000978, 4.67862862927, 394.7017453091],
    [0.00000000967, 0.19601324126, 1332.9917127094],
    [0.00000001232, 3.28428140208, 10.051123255],
    [0.00000000962, 5.17770276952, 416.8077000519],
    [0.00000001017, 1.746836744, 714.2920550459],
    [0.00000001065, 1.12354067485, 1961.8432987595],
    [0.00000000951, 5.15428525662, 1760.07753855241],
    [0.0000000099, 0.33566024066, 6328.0812106155],
    [0.00000001236, 4.27499899029, 263.26416554441],
    [0.00000001104, 2.1249516774, 394.8618040035],
    [0.00000000956, 2.78082151468, 1022.0688586509],
    [0.00000001275, 3.95835597791, 104.33342944339],
    [0.00000001056, 2.4142042118, 62.2827947575],
    [0.00000001143, 5.253892698, 511.7755353134],
    [0.00000000941, 4.62379540315, 555.3106427076],
    [0.00000001191, 0.13148121604, 2313.65989106819],
    [0.0000000117, 0.78792987093, 331.9290548522],
    [0.00000001072, 2.19877879267, 486.9088779582],
    [0.00000001059, 3.53258689279, 1471.2460850217],
    [0.00000001044, 1.75718704182, 841.9068640046],
    [0.00000000998, 2.70657811539, 522.28541650049],
    [0.00000001221, 6.0779846832, 473.31243127551],
    [0.00000000926, 5.46179970939, 179.1150280107],
    [0.00000001089, 0.06304982526, 1986.9730806731],
    [0.0000000095, 0.83670377886, 899.0168502742],
    [0.00000001071, 1.11068546883, 781.8399944059],
    [0.00000000998, 5.72763556428, 1151.93594618579],
    [0.00000001082, 5.25069693345, 2151.25100677631],
    [0.00000001057, 1.31797828563, 3708.0805731457],
    [0.00000000916, 2.63738626919, 386.00065973601],
    [0.000000012, 4.51772187194, 9793.5570848523],
    [0.00000001139, 5.00077006154, 5845.18814136799],
    [0.00000001219, 4.61690528448, 25771.7550894011],
    [0.00000001118, 1.34949230498, 1080.0726167978],
    [0.00000001043, 1.52618503474, 6261.4963920409],
    [0.00000001172, 6.01779016946, 160.365079915],
    [0.00000000906, 4.97943583685, 1475.4413628432],
    [0.00000000994, 1.83692702793, 1467.57705631699],
    [0.00000000982, 3.40437661999, 1460.4635093162],
    [0.00000001193, 0.19326102993, 1439.75351563271],
    [0.00000001075, 1.79436431149, 3171.2760610503],
    [0.00000000899, 0.95306018744, 606.2008538537],
    [0.0000000123, 2.60934825737, 5334.1440585051],
    [0.00000000928, 4.83201886555, 401.2940274481],
    [0.00000001122, 0.19423881613, 81.9959506997],
    [0.00000000901, 4.9680279645, 428.80205394729],
    [0.00000000912, 1.41505691677, 726.07146849269],
    [0.00000001205, 4.09366056977, 734.6694882018],
    [0.00000001047, 0.22623020333, 1304.6805370581],
    [0.00000001133, 5.06097777553, 733.18501549349],
    [0.00000001109, 6.09594487703, 1259.431462292],
    [0.00000000888, 6.13890404543, 4.4220489625],
    [0.00000000924, 2.63079629477, 633.5031296762],
    [0.00000000924, 5.77238894836, 633.9907646432],
    [0.00000000931, 4.56641553803, 529.82290799351],
    [0.00000000956, 2.4736497911, 1198.14324454341],
    [0.00000001118, 4.83663685761, 26.10731258001],
    [0.00000000962, 1.78028349992, 770.5818458209],
    [0.00000001092, 0.85875789744, 947.28726008359],
    [0.00000000899, 2.86831464473, 9896.64985907089],
    [0.00000001114, 1.71021700338, 210.08633253789],
    [0.00000000935, 1.95269050544, 97.21988244259],
    [0.00000000909, 2.8434106843, 981.1751204007],
    [0.00000000907, 3.53818082973, 3679.1387501755],
    [0.00000001078, 2.11362323812, 429.5357671302],
    [0.00000001223, 5.59274764012, 876.8585059047],
    [0.00000001053, 5.34256956029, 828.16740497],
    [0.00000001159, 1.80620732752, 979.427523134],
    [0.00000001179, 5.56984888168, 261.2371761149],
    [0.00000000872, 1.92760134845, 102.6888980407],
    [0.00000000902, 6.00836364296, 1407.51018671831],
    [0.0000000097, 0.92585247141, 51322.36608391289],
    [0.00000000954, 4.49316887147, 1527.8684363243],
    [0.0000000087, 5.19978000768, 103.0090154295],
    [0.000000011, 5.62879482377, 1229.89893849079],
    [0.0000000098, 1.25124342498, 1246.9012893198],
    [0.0000000098, 4.39283607857, 1246.4136543528],
    [0.00000001025, 3.23838487665, 1187.0975442795],
    [0.00000000899, 0.54202019063, 663.5594104667],
    [0.00000000966, 1.79575119893, 607.00400300581],
    [0.00000000974, 0.2762638787, 600.7842278823],
    [0.00000001052, 6.22307301865, 1901.7764291608],
    [0.00000000939, 4.72156953852, 12573.5090644671],
    [0.00000000875, 2.22995963009, 521.8580277308],
    [0.00000000927, 0.12921366968, 3583.64715792471],
    [0.00000000999, 5.03574675925, 2442.5130945193],
    [0.00000000868, 2.01963693018, 449.7365580394],
    [0.0000000092, 0.32639183017, 184.6010899513],
    [0.00000000916, 1.52011458512, 860.0661112693],
    [0.00000001151, 1.92144343659, 775.6896552516],
    [0.00000001064, 0.14103713575, 9775.39783758759],
    [0.00000000991, 1.62300930873, 447.552002043],
    [0.00000000934, 1.28685601483, 52168.93655363109],
    [0.00000000852, 6.16455890838, 4760.34895633411],
    [0.00000000879, 3.35373437012, 260.6040366685],
    [0.00000000961, 2.59929190647, 10529.9212333511],
    [0.00000000878, 1.53529030972, 166.4817891745],
    [0.00000001023, 3.25205599061, 517.4046096059],
    [0.00000001056, 0.94712347846, 622.2449810912],
    [0.00000000857, 3.62784678051, 905.64276230799],
    [0.00000000858, 4.37974924972, 866.7735213598],
    [0.0000000096, 0.24582787127, 5842.0067476303],
    [0.00000001006, 1.79633164069, 1332.728588151],
    [0.00000000859, 2.62618934557, 1886.7985756338],
    [0.00000001053, 4.19119124113, 527.4871020233],
    [0.00000000937, 1.0031418852, 597.60283414461],
    [0.00000000858, 0.41037816799, 1035.24672528451],
    [0.00000001183, 2.27973890086, 115.3791297073],
    [0.0000000092, 1.30633459352, 589.7385276184],
    [0.0000000092, 4.44792724711, 589.2508926514],
    [0.00000000852, 0.72219554639, 146.13798591339],
    [0.00000000852, 3.86378819998, 146.6256208804],
    [0.00000000844, 2.53592267944, 10.2781257911],
    [0.00000000844, 5.67751533303, 9.79049082409],
    [0.00000000959, 1.94261627589, 177.15498242291],
    [0.00000000959, 2.9470098907, 249.93084342011],
    [0.00000001035, 4.17393929319, 507.3557470833],
    [0.00000000988, 5.11539514032, 67.94549894479],
    [0.00000001133, 4.924354079, 36.404745446],
    [0.00000000843, 0.19283077743, 178.3788227003],
    [0.00000000843, 4.69679538916, 248.70700314271],
    [0.00000000836, 6.26008270853, 951.2194133467],
    [0.00000001, 0.00060532281, 598.5996718859],
    [0.0000000087, 1.56871527769, 2520.3330744724],
    [0.0000000101, 3.29456379641, 525.26891613211],
    [0.00000000869, 1.69757216185, 803.3007476148],
    [0.00000000862, 0.89788175589, 1336.6607414141],
    [0.00000000865, 2.71043672332, 1535.24510788349],
    [0.00000001156, 0.63783988377, 988.0255428431],
    [0.00000000854, 3.20756177408, 3119.9559667775],
    [0.00000000854, 3.20756177408, 3120.4436017445],
    [0.00000000959, 0.011253191, 167.80869531589],
    [0.00000000843, 5.93933593135, 769.5729459921],
    [0.00000000819, 5.32247266092, 20006.84263106329],
    [0.00000000871, 2.39559363846, 2015.9149036433],
    [0.00000001145, 2.59566377091, 982.3964685506],
    [0.00000000967, 1.79131153995, 274.09741748721],
    [0.00000000811, 3.51067946836, 310.95842873781],
    [0.00000001076, 0.55295132771, 195.6467902152],
    [0.00000000973, 0.39005913258, 480.00777927849],
    [0.00000000927, 2.26192813378, 221.9284843095],
    [0.00000000927, 5.7692906864, 205.1573415335],
    [0.00000001043, 3.8083329949, 1054.4722462597],
    [0.00000001118, 5.22401073053, 241.3664536058],
    [0.00000001087, 0.94496532019, 26404.5388287143],
    [0.00000000843, 5.30493118625, 9470.05166819489],
    [0.00000000799, 2.23950305681, 556.2738505541],
    [0.00000000916, 1.67106075742, 454.6655490438],
    [0.00000000867, 0.75856039322, 155.43608891061],
    [0.00000001078, 5.29407779979, 903.16145185841],
    [0.0000000095, 0.01679256709, 469.48334387639],
    [0.00000000972, 1.35094632973, 317.15695200191],
    [0.00000000793, 3.97038609207, 529.88659846831],
    [0.00000000798, 2.46893889261, 438.1483410543],
    [0.00000000885, 0.81574627494, 685.2301198692],
    [0.00000000791, 4.63298065332, 206.4629958155],
    [0.00000000919, 2.21054616872, 524.25752417581],
    [0.00000000919, 5.35213882231, 523.7698892088],
    [0.00000000841, 5.71772687954, 3590.7607049255],
    [0.00000000841, 5.71772687954, 3590.2730699585],
    [0.00000001022, 3.33436205114, 731.92754532131],
    [0.00000000978, 4.52983537485, 443.6198487799],
    [0.00000000923, 3.89253221329, 261.81332273089],
    [0.0000000086, 5.19233645312, 1784.719685499],
    [0.00000000803, 2.43021611713, 19992.61553706169],
    [0.00000000948, 2.63670367258, 3280.9947473027],
    [0.00000000852, 1.68072750753, 548.0940298428],
    [0.00000000873, 5.56384706144, 63.6039554045],
    [0.00000000956, 4.90457947532, 108.47803102759],
    [0.00000000972, 3.15655108462, 892.7970751507],
    [0.00000000926, 4.87388996442, 1025.6854977289],
    [0.00000000914, 0.82646186068, 832.34563644899],
    [0.0000000103, 1.54922251715, 586.5571338807],
    [0.00000000809, 0.02318871977, 1235.3679540889],
    [0.00000000809, 2.35631924662, 1310.1495526562],
    [0.00000000784, 1.33531692413, 1699.5230339867],
    [0.0000000102, 3.91431359487, 102.9608313197],
    [0.00000000817, 0.58884416481, 5.90652167079],
    [0.00000001007, 5.89584195442, 740.0524842784],
    [0.00000000872, 2.51565061639, 63.38020623529],
    [0.00000000934, 0.00461953261, 721.8932370137],
    [0.0000000078, 4.93205218405, 930.7725442216],
    [0.00000001031, 0.90633658665, 738.0803766031],
    [0.00000000793, 5.830913848, 746.4152717538],
    [0.00000001085, 2.59531505198, 592.4468406041],
    [0.00000000961, 4.24333704051, 1120.3927005595],
    [0.00000000888, 3.27274826634, 26514.7451499337],
    [0.00000000782, 0.97176938732, 519.63984183961],
    [0.000000008, 4.78070775485, 4113.3381230193],
    [0.00000000945, 2.48989407033, 1673.7626047542],
    [0.0000000085, 1.8812729593, 580.33735875721],
    [0.0000000103, 2.74042787073, 3657.24811383991],
    [0.00000000775, 1.42999892472, 735.58451193849],
    [0.00000000775, 4.57159157831, 736.0721469055],
    [0.00000000951, 2.79912666955, 604.2287461784],
    [0.0000000076, 0.06105636609, 3267.2552882681],
    [0.00000000802, 2.87236079717, 362.6184750891],
    [0.00000000866, 3.55253106731, 1293.63483679419],
    [0.00000000766, 0.39602652848, 188.6762555663],
    [0.00000000768, 3.19838844999, 845.57589270931],
    [0.00000000766, 6.03837318319, 2439.3317007816],
    [0.00000000769, 4.30008269962, 1051.9763815951],
    [0.00000000776, 4.3568045163, 2014.2703722406],
    [0.00000000771, 1.21518951297, 1052.07274981469],
    [0.00000000822, 4.4191366894, 582.62498061761],
    [0.00000001002, 4.18366137124, 52183.1636476327],
    [0.00000000828, 2.60868899519, 631.7891623043],
    [0.00000000973, 5.48773198848, 519.1497147451],
    [0.00000000839, 0.93524853813, 13362.6935242827],
    [0.00000000842, 3.25093404707, 204.45725824539],
    [0.00000000756, 0.00983905715, 693.82813957829],
    [0.00000000756, 3.15143171073, 694.31577454531],
    [0.00000000747, 6.11050160069, 962.7527485776],
    [0.00000000916, 5.2449071633, 688.41151360689],
    [0.00000000769, 1.54076301375, 6058.48723680599],
    [0.00000000756, 2.12064124784, 545.7157852572],
    [0.0000000083, 1.92350323862, 595.47066777489],
    [0.00000000831, 0.7728031325, 436.8763166671],
    [0.00000000776, 1.38249726509, 187.9949320101],
    [0.00000000757, 4.23072662628, 5496.2254698659],
    [0.00000000977, 6.20713264303, 1055.43296197871],
    [0.00000000737, 3.5415531345, 225.58545092669],
    [0.0000000094, 2.94283899053, 462.00609858071],
    [0.00000000881, 5.71084129732, 157.6713211443],
    [0.00000000881, 5.46197017645, 269.41450469871],
    [0.00000000768, 2.97725228498, 2093.2472486294],
    [0.00000000945, 5.11643863868, 347.6551757771],
    [0.00000000789, 2.80405308992, 678.27413943531],
    [0.00000000894, 5.28864466497, 185.08872491831],
    [0.00000000887, 0.33081399998, 938.63685074779],
    [0.00000000848, 0.1688103746, 1016.59984305279],
    [0.00000000778, 0.01629844158, 5753.6287023803],
    [0.00000000778, 3.15789109517, 5753.14106741329],
    [0.00000000843, 1.02624495037, 976.4922076122],
    [0.000000009, 2.19862220278, 655.1738390787],
    [0.0000000073, 3.17028402119, 497.9545782221],
    [0.00000000879, 3.20284714972, 494.2348732801],
    [0.00000000728, 4.17683406683, 995.88984936931],
    [0.00000000729, 5.48820634686, 632.58810593949],
    [0.00000000729, 2.34661369327, 633.07574090651],
    [0.00000000841, 0.88660531241, 1051.06135785839],
    [0.0000000081, 6.22385696664, 3900.0390275813],
    [0.00000000774, 1.63307607705, 451.48415530609],
    [0.00000000792, 1.63932414999, 193.93282284329],
    [0.00000000894, 1.22695933225, 103.28840759231],
    [0.00000000744, 5.76295987616, 662.7750210465],
    [0.00000001019, 4.06927095682, 7232.49527644471],
    [0.0000000072, 6.27725825901, 103711.47146249928],
    [0.00000000776, 1.68634145832, 1703.4551872498],
    [0.00000001001, 2.29066167531, 1126.54303971381],
    [0.0000000086, 1.85082345148, 2748.6100234374],
    [0.00000000716, 2.80780296922, 4319.0360364895],
    [0.00000000716, 5.94939562281, 4319.5236714565],
    [0.00000000797, 0.88312421788, 529.9829666879],
    [0.00000000729, 3.0886139593, 1649.383582366],
    [0.00000000803, 2.56866081755, 151.0163006805],
    [0.00000000765, 1.92150517901, 1379.4621356254],
    [0.00000000765, 5.0630978326, 1379.9497705924],
    [0.00000000749, 3.86728999613, 785.772147669],
    [0.00000000836, 4.09079447369, 4010.24534880071],
    [0.00000000727, 1.76200509604, 608.1608994415],
    [0.00000000727, 1.76200509604, 608.64853440851],
    [0.00000000719, 1.08122225861, 467.68335698301],
    [0.00000000709, 2.16805792847, 103.5490400232],
    [0.00000000709, 2.16805792847, 103.0614050562],
    [0.0000000092, 3.3794883925, 870.7056746229],
    [0.00000000716, 3.0198438852, 664.78325074409],
    [0.00000000857, 4.73776093669, 2306.5463440674],
    [0.00000000724, 4.70354725719, 740.52556503041],
    [0.00000000708, 4.72112546056, 2431.4673942554],
    [0.00000000706, 4.9567965899, 102.63650841399],
    [0.00000000706, 4.9567965899, 103.12414338101],
    [0.00000000824, 0.35265072853, 1163.6817297378],
    [0.00000000722, 3.07523457584, 171.2170915897],
    [0.00000000723, 0.7457106786, 829.37669103239],
    [0.0000000072, 1.80911156979, 255.8687342533],
    [0.00000000956, 1.61313021087, 3068.1832868317],
    [0.000000008, 4.60599313494, 279.72649177971],
    [0.000000008, 0.28363303165, 147.3593340633],
    [0.00000000868, 5.0888600477, 669.4009330803],
    [0.00000000769, 4.42409463602, 3465.8396547375],
    [0.00000000745, 4.41268882152, 843.145258497],
    [0.00000000848, 4.34921581475, 103.3847758119],
    [0.00000000703, 0.03980855697, 4003.1318017999],
    [0.00000000719, 2.9642143182, 9988.69693302559],
    [0.00000000818, 3.5819594706, 311.48218572709],
    [0.00000000901, 5.50487267537, 937.8860912224],
    [0.00000000783, 0.40400095682, 199.83708378171],
    [0.00000000783, 1.34403255618, 227.24874206131],
    [0.00000000909, 5.35487801471, 4009.7577138337],
    [0.00000000711, 0.19813010381, 457.3738620295],
    [0.00000000705, 1.55599502521, 5653.98044645779],
    [0.00000000712, 4.50433897135, 354.2810878109],
    [0.00000000733, 4.93048865178, 37.6285857234],
    [0.00000000708, 2.84637541601, 840.6975779422],
    [0.00000000708, 5.98796806961, 840.2099429752],
    [0.00000000695, 4.51136204527, 812.70191647599],
    [0.00000000695, 4.51136204527, 813.189551443],
    [0.00000000736, 1.20053248385, 403.9474586796],
    [0.00000000733, 0.72827400906, 182.0357893175],
    [0.00000000836, 3.44633331041, 2331.8191383329],
    [0.00000000928, 2.16436836139, 842.13386654071],
    [0.00000000768, 5.27501406783, 1460.2003847578],
    [0.00000000685, 5.86089797553, 455.29619636271],
    [0.00000000792, 1.62315871295, 5422.5221037551],
    [0.00000000837, 5.42340126188, 570.7761312016],
    [0.00000000682, 4.8856399027, 3693.8534791441],
    [0.00000000752, 2.13635874109, 413.34862754081],
    [0.00000000817, 1.53257391407, 391.73279989249],
    [0.00000000681, 2.40403440268, 458.33457774851],
    [0.00000000803, 5.00204662708, 418.49006686629],
    [0.00000000681, 0.38545629971, 414.5749599457],
];

const X1: &[Term] = &[
    [0.09285877988, 0.61678993503, 0.2438174835],
    [0.0308650168, 4.27493632359, 426.8420083595],
    [0.02728479923, 5.8447638902, 206.42936592071],
    [0.02644990371, 5.33256382404, 220.6564599223],
    [0.00629201988, 0.32457757988, 7.3573644843],
    [0.00256626023, 3.52453971595, 640.1411037975],
    [0.00312353889, 4.8295630897, 419.72846135871],
    [0.00189297041, 4.48614588896, 433.9555553603],
    [0.0020446502, 1.07744722386, 213.5429129215],
    [0.00118113185, 1.16350724193, 110.45013870291],
    [0.00067024295, 3.73239360544, 316.6356871401],
    [0.00066948413, 5.20221291915, 227.77000692311],
    [0.00031931062, 5.99122459014, 199.3158189199],
    [0.00024548187, 1.72318512907, 205.9417309537],
    [0.00030521021, 0.18185692767, 14.47091148511],
    [0.00022265017, 6.19403063806, 103.3365917021],
    [0.0001893952, 2.77554483793, 853.4401992355],
    [0.00018082904, 5.08903997736, 209.6107596584],
    [0.00017786477, 6.103215363, 217.4750661846],
    [0.00016307253, 4.86906758451, 216.72430665921],
    [0.00016919177, 4.58471330942, 633.0275567967],
    [0.00015920273, 0.03453366907, 210.36151918381],
    [0.00016167186, 5.61042793206, 323.74923414091],
    [0.00014472589, 3.67415332596, 647.25465079831],
    [0.00011071575, 0.03003679044, 117.5636857037],
    [0.00009887534, 5.18637985637, 202.4972126576],
    [0.0000871393, 6.03455153122, 224.5886131854],
    [0.00006197025, 1.3646434911, 213.0552779545],
    [0.00005502258, 4.40320486328, 441.06910236111],
    [0.00005466098, 2.60358233388, 11.2895177474],
    [0.00003484091, 2.54141592195, 6.86972951729],
    [0.00003596198, 2.50280897492, 309.0345051723],
    [0.00003029001, 1.24873358475, 522.3336006103],
    [0.00003353859, 3.74904517566, 95.7354097343],
    [0.00002987715, 5.64325133005, 309.5221401393],
    [0.00002732424, 4.10964270304, 149.8070146181],
    [0.00003741808, 4.82356861468, 412.6149143579],
    [0.00002374342, 1.71597491607, 198.82818395289],
    [0.00002875345, 0.10934318294, 426.3543733925],
    [0.00002121841, 1.70223145921, 220.16882495529],
    [0.00002386687, 0.22569849869, 109.9625037359],
    [0.00001755551, 0.7746309161, 277.2788112249],
    [0.00001690652, 3.97638248269, 422.9098550964],
    [0.00001545396, 5.30260231719, 330.8627811417],
    [0.00001447492, 2.03498842518, 4.1759707466],
    [0.00001392451, 2.03410425344, 1066.7392946735],
    [0.00001331483, 5.06295810929, 234.8835539239],
    [0.00001452348, 6.21365122108, 3.42521122121],
    [0.00001285559, 2.40490814955, 415.7963080956],
    [0.00001159539, 4.60389667301, 537.0483295789],
    [0.00001128476, 5.45092270832, 423.66061462181],
    [0.00001131769, 6.00809348724, 529.9347825781],
    [0.00001127023, 2.88170875021, 860.55374623631],
    [0.00001101803, 4.07656502687, 430.02340209721],
    [0.00001061927, 4.38341564719, 846.3266522347],
    [0.0000134336, 2.98910861966, 211.09523236671],
    [0.0000133164, 1.90897752717, 215.99059347631],
    [0.00001287848, 2.08433845806, 522.8212355773],
    [0.00001050973, 0.4149008614, 412.12727939089],
    [0.00000900723, 0.97940540803, 838.72547026689],
    [0.00000882663, 5.41577217529, 437.8877086234],
    [0.00000924505, 0.31084816096, 743.23387801611],
    [0.00000876882, 6.15951573282, 96.2230447013],
    [0.00000905253, 3.37316127293, 3.6883357796],
    [0.00000820808, 4.74555854872, 223.83785366],
    [0.00000844907, 2.2419189166, 625.42637482889],
    [0.00000760731, 0.32645781021, 625.9140097959],
    [0.00000657423, 1.75192962523, 316.14805217309],
    [0.00000813631, 0.0263654824, 21.5844584859],
    [0.00000642768, 0.08669014735, 1059.6257476727],
    [0.00000657845, 3.9000228222, 88.6218627335],
    [0.00000715042, 6.12383205661, 430.7741616226],
    [0.00000596876, 5.09870868637, 124.6772327045],
    [0.0000047202, 3.60910799409, 654.3681977991],
    [0.00000467656, 1.37893062096, 515.2200536095],
    [0.00000472526, 0.17976235838, 203.247972183],
    [0.00000487417, 1.14265056645, 736.1203310153],
    [0.00000402114, 4.42612765272, 86.07111631471],
    [0.00000376954, 3.71201411962, 76.50988875911],
    [0.0000041941, 5.88905869137, 742.74624304909],
    [0.00000439384, 2.62527563052, 301.9209581715],
    [0.00000458871, 0.66305280938, 529.44714761109],
    [0.00000345395, 6.17484774422, 192.2022719191],
    [0.00000334209, 0.71189291081, 1155.1173399235],
    [0.00000330276, 0.35761199969, 302.40859313851],
    [0.00000339713, 2.73817515158, 218.2087793675],
    [0.0000030495, 0.18421276814, 231.70216018621],
    [0.00000312395, 2.3662764172, 629.0954035336],
    [0.00000311746, 1.93452684244, 941.8182444855],
    [0.00000299095, 2.15964302278, 208.8770464755],
    [0.00000299955, 0.17404785977, 728.5191490475],
    [0.00000271105, 2.7036309448, 288.32451148881],
    [0.00000260779, 0.87015911392, 18.40306474821],
    [0.00000278736, 5.3589341393, 632.5399218297],
    [0.00000335527, 3.07953134072, 203.9816853659],
    [0.00000259607, 6.00394254983, 10.538758222],
    [0.00000263983, 3.55443649812, 363.1061100561],
    [0.00000291544, 1.81131242466, 223.1041404771],
    [0.00000214376, 6.03151333634, 208.1262869501],
    [0.00000208551, 5.16427411899, 218.9595388929],
    [0.00000208257, 4.3872625811, 408.68276109481],
    [0.00000211653, 2.10642373554, 138.76131435421],
    [0.00000199845, 2.29578299708, 13.9832765181],
    [0.00000195781, 0.3542835571, 52.446380556],
    [0.00000192346, 6.21537031577, 201.01273994931],
    [0.00000191573, 0.448110776, 341.01470952831],
    [0.00000185995, 4.78683696303, 948.9317914863],
    [0.00000168803, 1.10901900891, 831.6119232661],
    [0.00000170172, 1.18102994579, 350.5759370839],
    [0.00000167553, 5.0026872572, 226.07308589371],
    [0.0000017751, 4.94085831586, 210.6221516147],
    [0.00000177755, 6.22073652647, 216.4636742283],
    [0.00000157494, 1.71852514061, 195.38366565681],
    [0.00000162215, 6.01667468309, 956.53297345411],
    [0.00000160622, 2.21143597606, 127.22797912329],
    [0.00000147298, 0.31012308764, 9.8050450391],
    [0.00000177635, 6.27025545843, 160.852714882],
    [0.00000170308, 2.63474062872, 207.913838629],
    [0.00000158062, 5.63276958593, 1059.1381127057],
    [0.00000138665, 0.44735566636, 1471.50920958009],
    [0.00000150976, 3.13927888955, 636.2089505344],
    [0.00000136839, 4.5169071217, 544.1618765797],
    [0.00000163932, 2.23903496342, 219.171987214],
    [0.00000164921, 4.61861878322, 22.3352180113],
    [0.00000134204, 1.25807922003, 703.8770021009],
    [0.00000141934, 0.59018411736, 202.0095776906],
    [0.00000153018, 4.27626456939, 56.3785338191],
    [0.00000132722, 3.97656514012, 750.3474250169],
    [0.00000136617, 1.64500267431, 1258.21011414209],
    [0.00000124984, 4.28860125524, 448.1826493619],
    [0.0000013831, 4.40216198828, 142.6934676173],
    [0.0000012114, 0.16586240985, 949.4194264533],
    [0.00000146873, 0.4752137565, 845.8390172677],
    [0.00000135623, 0.85079579674, 490.5779066629],
    [0.00000114737, 0.83509600385, 433.46792039329],
    [0.00000107506, 2.7464109355, 565.35950523021],
    [0.00000105407, 3.58312013649, 209.35012722751],
    [0.00000123012, 2.85293627235, 483.4643596621],
    [0.00000104647, 1.30261134749, 217.73569861551],
    [0.00000123445, 4.85723767211, 266.233110961],
    [0.00000121327, 2.34436045601, 618.3128278281],
    [0.00000121539, 2.2800663581, 515.70768857651],
    [0.0000009833, 1.2715337984, 1280.0383901115],
    [0.00000123139, 1.72477244855, 12.77399045571],
    [0.00000106461, 6.2130735569, 1044.9110187041],
    [0.00000134338, 0.13238469429, 419.2408263917],
    [0.0000010753, 2.04781430457, 424.39432780471],
    [0.00000114356, 3.50494100764, 270.1652642241],
    [0.00000094347, 4.48494950953, 1265.32366114289],
    [0.00000104237, 3.80594641363, 70.6056278207],
    [0.0000008841, 2.09844529978, 1073.85284167431],
    [0.00000091547, 0.19575334067, 106.5179854398],
    [0.00000084219, 6.17220906984, 113.6315324406],
    [0.00000091641, 2.30922052677, 497.69145366371],
    [0.00000080939, 4.7081786354, 651.1868040614],
    [0.00000082304, 3.28548883281, 643.32249753521],
    [0.00000099237, 5.82968286033, 639.6534688305],
    [0.00000073063, 0.84493736921, 1148.00379292269],
    [0.00000079913, 3.01047372573, 191.45151239371],
    [0.00000070813, 2.40778621473, 251.6759485593],
    [0.00000072632, 1.31854571732, 107.2687449652],
    [0.00000075817, 1.4416447688, 284.39235822571],
    [0.00000072415, 1.87310857657, 191.7146369521],
    [0.00000084109, 1.771692501, 219.6932520758],
    [0.00000066814, 4.85072561146, 636.95971005981],
    [0.00000064253, 4.88041745139, 71.09326278771],
    [0.00000073347, 4.3197126467, 344.9468627914],
    [0.00000061578, 5.13231029134, 479.532206399],
    [0.00000060447, 0.18657130674, 1787.9010792367],
    [0.00000063039, 3.97913628016, 437.136949098],
    [0.00000064265, 1.35985415674, 1574.6019837987],
    [0.00000058169, 3.07003751562, 75.0254160508],
    [0.00000065491, 5.37959870394, 1375.52998236229],
    [0.00000057055, 1.29146537045, 98.6561710411],
    [0.00000063072, 3.82756140289, 359.173956793],
    [0.00000076825, 0.2606103261, 839.2131052339],
    [0.00000065944, 3.15806762275, 207.3925737672],
    [0.00000065704, 0.38527237466, 2.9375762542],
    [0.00000059449, 4.25418200211, 417.2807808039],
    [0.00000066539, 0.19553179802, 1162.23088692429],
    [0.00000053194, 1.57281678134, 227.2823719561],
    [0.0000006389, 1.98911021042, 235.6343134493],
    [0.00000052968, 2.48775989817, 175.40987728371],
    [0.0000005148, 5.40158452623, 416.547067621],
    [0.00000053788, 0.70800398665, 114.38229196601],
    [0.00000052017, 2.0114546547, 220.7046440321],
    [0.00000048475, 0.16935246445, 209.12312469139],
    [0.00000048625, 0.32855808278, 63.9797157869],
    [0.00000047377, 4.1908075774, 1581.7155307995],
    [0.00000066468, 4.53149070521, 337.9763281425],
    [0.00000047697, 1.9178485425, 352.06040979221],
    [0.000000504, 1.52095286213, 429.28968891431],
    [0.00000051302, 1.56161815189, 121.4958389668],
    [0.00000048534, 3.08596013281, 151.2914873264],
    [0.00000050418, 2.66057863189, 181.2995840071],
    [0.00000052765, 3.98236980014, 4.9096839295],
    [0.0000005613, 0.33220104012, 404.7506078317],
    [0.00000053587, 0.57493074933, 554.31380496631],
    [0.00000050974, 2.05704046175, 934.70469748469],
    [0.00000044236, 6.08174708544, 63.49208081989],
    [0.00000046842, 2.24622013459, 245.7862418359],
    [0.0000004153, 6.03788211153, 99.40443843901],
    [0.00000044045, 2.25826631267, 205.46615807421],
    [0.0000004058, 2.82302665464, 867.6672932371],
    [0.0000004103, 4.0347926519, 81.50831573269],
    [0.00000040882, 3.76127180855, 621.98185653281],
    [0.00000038986, 4.46168372795, 131.79077970531],
    [0.00000045904, 0.45235179276, 1589.3167127673],
    [0.00000053423, 1.19152844807, 1052.51220067191],
    [0.00000041233, 5.98630903924, 1361.3028883607],
    [0.00000046867, 2.84588810562, 10.8018827804],
    [0.00000046594, 4.62317456797, 323.2615991739],
    [0.00000037309, 0.18886259626, 194.89603068979],
    [0.00000036647, 1.88978550694, 148.32254190981],
    [0.00000041194, 5.88019785775, 644.0732570606],
    [0.00000036297, 5.66458901484, 445.00125562421],
    [0.00000036204, 2.75001997487, 214.2936724469],
    [0.00000041215, 2.50684492522, 198.5650593945],
    [0.00000045013, 1.96686946581, 842.3944989716],
    [0.00000034449, 0.57010226677, 1464.3956625793],
    [0.00000034256, 2.87917030633, 289.8089841971],
    [0.0000003682, 2.97826186847, 206.3811818109],
    [0.00000033887, 1.08487218987, 89.10949770051],
    [0.00000036762, 3.81424116419, 265.745475994],
    [0.00000032982, 5.79106870822, 276.79117625789],
    [0.00000033116, 5.24689400325, 178.11819026941],
    [0.00000032822, 2.19475458249, 212.79215339611],
    [0.00000037519, 2.38353348143, 228.5207664485],
    [0.00000031997, 1.8012408982, 275.7943385166],
    [0.00000040913, 2.29234559153, 209.87388421679],
    [0.00000030291, 4.38172577701, 78.9575693139],
    [0.00000029064, 5.92812854477, 248.9676355736],
    [0.00000031114, 1.08106077375, 1890.9938534553],
    [0.00000028459, 1.12291882969, 102.84895673509],
    [0.00000035352, 2.37935763988, 501.62360692681],
    [0.00000027208, 6.21367293026, 2104.2929488933],
    [0.00000037148, 1.38568578551, 729.0067840145],
    [0.00000033504, 1.04515396423, 436.4032359151],
    [0.00000032029, 3.21836665934, 414.31183538731],
    [0.00000027479, 3.85996509219, 114.6429243969],
    [0.00000029371, 5.710755205, 215.0273856298],
    [0.0000003041, 5.5477226294, 31.9995114309],
    [0.00000033556, 6.12868949605, 1478.62275658089],
    [0.00000028365, 5.81150437735, 355.99256305531],
    [0.00000024664, 4.56168548884, 427.805216206],
    [0.00000028864, 5.14212159473, 1691.9218520189],
    [0.00000033503, 4.61144380837, 735.6326960483],
    [0.00000027468, 5.08884052063, 405.5013673571],
    [0.00000023818, 2.06467933184, 190.9638774267],
    [0.00000023542, 2.98679769294, 278.76328393321],
    [0.00000023335, 3.92749113053, 1898.10740045609],
    [0.0000002481, 0.83325589326, 425.878800513],
    [0.00000023968, 1.9375681424, 431.5078748055],
    [0.00000025517, 4.02939599784, 69.3963417583],
    [0.00000022253, 2.97476505625, 602.00806815971],
    [0.0000002319, 0.53219820713, 618.8004627951],
    [0.00000021849, 3.74059365574, 299.37021175271],
    [0.0000002127, 0.55413991317, 917.1760975389],
    [0.00000022382, 2.85390353571, 576.4052054941],
    [0.00000021104, 4.01921632968, 319.8170808778],
    [0.00000024718, 1.77317212162, 1251.0965671413],
    [0.0000002079, 4.86337923369, 241.9971009247],
    [0.00000025298, 1.23773943016, 422.1761419135],
    [0.00000019818, 1.13017694076, 5.6604434549],
    [0.0000001953, 5.09943396528, 313.4542934024],
    [0.00000023121, 4.4741720368, 230.9514006608],
    [0.00000019612, 1.54092409817, 508.10650660869],
    [0.00000019333, 2.8851235802, 134.3415261241],
    [0.00000020375, 1.15875306859, 426.8901924693],
    [0.00000020742, 4.93204856327, 312.70353387701],
    [0.00000019203, 5.31312736, 320.5678404032],
    [0.00000018481, 3.48969850886, 39.6006933987],
    [0.00000021067, 4.89382442775, 421.4253823881],
    [0.00000019538, 1.46473404121, 189.1638905333],
    [0.00000020461, 5.56819424455, 327.68138740401],
    [0.00000021171, 2.77619058613, 221.61966776881],
    [0.0000001913, 0.13369689085, 98.91680347199],
    [0.00000018295, 0.64431243991, 295.2950461377],
    [0.0000001816, 5.37336395843, 205.67860639531],
    [0.00000017549, 4.33484240447, 120.1144321225],
    [0.00000017626, 1.33869269116, 956.04533848709],
    [0.00000016792, 0.30316695138, 1780.78753223589],
    [0.00000016458, 4.30804482989, 439.37218133171],
    [0.00000018239, 0.4811263351, 6276.2061204741],
    [0.00000016441, 5.70984800135, 1169.83206889211],
    [0.00000016263, 6.02060382308, 1272.9248431107],
    [0.00000016077, 1.92413826292, 778.6586006682],
    [0.00000018919, 0.91986849601, 348.1282565291],
    [0.00000020156, 5.28936051941, 212.05844021321],
    [0.00000017804, 6.17596938223, 6290.4332144757],
    [0.00000022054, 2.76742279514, 294.80741117069],
    [0.00000015573, 4.69738515912, 74.53778108379],
    [0.00000016309, 5.78358696622, 1677.6947580173],
    [0.00000018944, 3.21110443213, 127.71561409031],
    [0.00000017127, 1.90459336979, 10206.4158166937],
    [0.0000001969, 2.03308592691, 696.7634551001],
    [0.00000020455, 2.11078778994, 117.0760507367],
    [0.00000016447, 3.43440454322, 237.9219353097],
    [0.00000016503, 0.82013608893, 2207.38572311189],
    [0.00000020378, 4.24340498319, 426.7938242497],
    [0.00000016713, 1.3171628574, 10220.6429106953],
    [0.00000017063, 4.67555598732, 15.2216710105],
    [0.00000018187, 6.20263428999, 167.07249000551],
    [0.0000001483, 5.67343259467, 415.3086731286],
    [0.00000015128, 1.51541058227, 710.99054910171],
    [0.00000014162, 6.22052289061, 525.7419968841],
    [0.00000014139, 5.13566894741, 39.1130584317],
    [0.0000001806, 5.83443986197, 1795.0146262375],
    [0.00000013362, 6.01694375584, 106.0303504728],
    [0.00000013903, 1.06036130597, 312.4429014461],
    [0.00000015359, 5.25985265745, 182.5234242845],
    [0.00000013906, 0.65123132262, 59.55992755679],
    [0.00000013001, 3.44349383922, 87.555589023],
    [0.00000013054, 4.90885990739, 196.2774375341],
    [0.00000015661, 0.2416684715, 1162.7185218913],
    [0.00000017412, 2.16826879959, 202.760337216],
    [0.00000014557, 4.55052624968, 381.5954257209],
    [0.0000001711, 1.29146334369, 432.471082652],
    [0.00000012702, 5.96286796963, 2420.68481854989],
    [0.00000017195, 3.81192777968, 536.5606946119],
    [0.00000012663, 0.27572988542, 1376.0176173293],
    [0.00000015239, 5.32338258618, 429.7627696663],
    [0.00000012562, 4.36343770041, 852.9525642685],
    [0.00000012487, 3.78773003979, 757.4609720177],
    [0.00000012205, 3.50752925238, 661.4817447999],
    [0.00000014071, 4.06346090551, 395.8225197225],
    [0.00000013589, 0.17638027363, 97.11681657861],
    [0.00000013297, 2.42892875675, 849.5080459724],
    [0.0000001295, 0.16804220244, 91.8032564712],
    [0.000000128, 0.91304411194, 1272.4372081437],
    [0.0000001406, 0.19022187362, 116.18227885939],
    [0.00000013165, 4.65152797704, 129.6756596781],
    [0.00000011819, 0.54037105135, 431.03479405351],
    [0.00000011579, 5.2222020645, 144.39038864671],
    [0.00000011596, 6.2246037249, 230.8083883089],
    [0.00000012157, 5.83781129189, 374.15181032],
    [0.00000011328, 3.65554523534, 2214.4992701127],
    [0.0000001331, 1.48760075848, 1567.48843679789],
    [0.0000001376, 2.11422894625, 216.9874312176],
    [0.00000011244, 1.65064078721, 777.17412795991],
    [0.00000011256, 2.33090248405, 1582.2031657665],
    [0.00000011849, 3.3931284998, 305.5899868762],
    [0.00000011016, 0.8992152464, 416.059432654],
    [0.00000010858, 5.70727580993, 422.42222012939],
    [0.00000014447, 2.70740169801, 333.9011625275],
    [0.00000010877, 3.35090068282, 67.424234083],
    [0.00000010671, 5.59629136646, 426.3207434977],
    [0.00000010673, 5.82038644847, 221.40721944771],
    [0.00000013923, 3.33425500011, 558.2459582294],
    [0.00000012161, 6.15839226574, 28.6980054867],
    [0.00000011528, 4.81930434459, 432.2586343309],
    [0.00000012972, 5.99735821999, 196.8681383651],
    [0.00000010573, 4.30685728121, 145.874861355],
    [0.00000011572, 1.84813289069, 5849.1202946311],
    [0.00000012498, 4.92447718078, 2008.3137216755],
    [0.00000010593, 4.14913290174, 343.4623900831],
    [0.00000012818, 1.19008859693, 216.2366716922],
    [0.0000001023, 1.16924254829, 199.528267241],
    [0.00000010672, 0.61641428977, 84.5866436064],
    [0.00000010068, 1.3635623998, 206.9506307825],
    [0.00000011596, 1.8378800366, 1155.6049748905],
    [0.00000010203, 1.09288636884, 192.935985102],
    [0.00000009849, 0.65561240609, 767.61290040431],
    [0.00000010252, 0.21594911177, 618.0497032697],
    [0.00000010915, 2.79445278511, 200.2095907972],
    [0.00000009693, 1.05765509778, 99.6675629974],
    [0.00000009672, 6.28030039661, 238.815707187],
    [0.00000009664, 3.32194333896, 182.05034353251],
    [0.0000000986, 2.88110794062, 572.473052231],
    [0.00000010186, 0.41648522301, 20.850745303],
    [0.00000010831, 3.27468814796, 9779.32999085069],
    [0.00000009746, 4.95654399301, 185.2317372702],
    [0.00000009573, 3.93243598582, 281.210964488],
    [0.00000011944, 2.18663468608, 62.0076081116],
    [0.00000009779, 2.4554049544, 188.41313100791],
    [0.00000010421, 5.51901551995, 404.2629728647],
    [0.00000010874, 0.05198472409, 153.73916788121],
    [0.00000010712, 6.08785652303, 427.3632732213],
    [0.00000009203, 0.58809567989, 212.27088853431],
    [0.00000009203, 4.3015304867, 214.81493730871],
    [0.00000010194, 1.27958314866, 5863.3473886327],
    [0.00000009371, 3.72043342105, 227.557558602],
    [0.00000010238, 5.85231629543, 244.5624015585],
    [0.00000010084, 2.37757705902, 1265.81129610991],
    [0.00000010456, 4.58738416662, 41.4006802921],
    [0.00000010166, 4.11408240826, 143.9027536797],
    [0.00000011381, 1.44255806186, 156.9205616189],
    [0.00000012113, 1.46915384562, 563.87503252191],
    [0.00000010043, 2.0951734045, 226.8762350458],
    [0.00000009235, 2.03101070691, 159.36824217371],
    [0.00000008818, 1.31229741323, 50.9619078477],
    [0.00000009068, 4.25480546013, 131.6477673534],
    [0.00000010089, 4.87714594181, 260.01333583751],
    [0.00000010283, 5.60568632571, 46.71424039951],
    [0.00000009854, 1.36241255057, 333.4135275605],
    [0.00000009008, 1.18554265407, 637.69342324271],
    [0.00000008926, 3.80008774802, 234.149840741],
    [0.00000008557, 3.22651762138, 963.6465204549],
    [0.00000010257, 5.85233716551, 64.97655352819],
    [0.00000009526, 2.70626925959, 9793.5570848523],
    [0.00000009414, 4.22693590424, 67.91186905],
    [0.00000009628, 4.95110149071, 326.9306278786],
    [0.00000011719, 2.59289161193, 45.3328335552],
    [0.00000008304, 2.74677901344, 547.2002579655],
    [0.00000008224, 0.02907773024, 2097.1794018925],
    [0.00000008279, 6.18251689735, 241.8540885728],
    [0.00000009189, 3.25644713958, 556.7614855211],
    [0.00000008334, 2.43224998073, 238.6726948351],
    [0.0000000803, 1.57230846027, 245.03548231051],
    [0.00000010377, 2.43734552323, 212.6491410442],
    [0.00000010377, 2.45228064336, 214.43668479881],
    [0.00000009061, 2.7298646789, 206.47755003051],
    [0.00000008325, 1.31204760835, 824.4983762653],
    [0.00000007948, 0.66902213114, 423.17297965479],
    [0.0000001052, 2.16910803165, 93.1846633155],
    [0.00000008773, 0.84825417283, 347.6406215621],
    [0.00000008377, 0.53191864317, 2523.7775927685],
    [0.00000008448, 0.59207162429, 1588.82907780029],
    [0.00000008685, 5.30112505951, 220.60827581251],
    [0.00000007716, 4.75842513626, 78.2068097885],
    [0.00000007794, 1.04095159566, 411.8641548325],
    [0.00000008324, 6.15163980389, 646.76701583129],
    [0.00000007401, 3.67486771061, 329.48137429739],
    [0.00000008108, 1.2633167697, 60.52313540329],
    [0.00000007383, 0.99737896217, 259.1195639602],
    [0.00000007791, 2.57812694404, 174.1860370063],
    [0.00000007076, 1.51163028004, 464.97504399731],
    [0.00000009308, 5.16234685777, 273.34665796181],
    [0.00000009741, 5.52835704075, 2111.40649589409],
    [0.00000007187, 3.90837528693, 864.4858994994],
    [0.00000007014, 3.23027495127, 627.61093082531],
    [0.00000006966, 5.87843482101, 282.6954371963],
    [0.00000007308, 0.27091093377, 942.3058794525],
    [0.00000006845, 0.5177989811, 1493.3374855495],
    [0.00000006779, 1.3249619715, 357.68948408471],
    [0.00000007128, 3.87942883373, 134.8291610911],
    [0.00000007238, 2.66449317354, 749.8597900499],
    [0.00000006975, 2.86950431371, 267.71758366931],
    [0.00000007167, 3.95268856947, 459.0853372739],
    [0.00000007917, 3.50680613163, 23.81969071961],
    [0.00000006648, 1.31476044069, 1287.15193711231],
    [0.000000068, 1.45829035132, 561.4273519671],
    [0.00000008501, 2.20054323238, 224.1009782184],
    [0.00000006569, 1.46335902098, 339.53023682],
    [0.00000008044, 0.78812832104, 196.1344251822],
    [0.00000006518, 6.21803736938, 638.65663108921],
    [0.00000007597, 4.56291528763, 186.71620997851],
    [0.00000008282, 0.90504128787, 82.13896305161],
    [0.00000007088, 2.68605579572, 570.98857952271],
    [0.00000006908, 3.16579782135, 526.7533888404],
    [0.00000006418, 0.83656417761, 106.7811099982],
    [0.00000006362, 5.65057614189, 1994.08662767389],
    [0.00000006216, 2.02339054092, 171.8984151459],
    [0.00000006708, 2.480797171, 508.5941415757],
    [0.00000007258, 1.20191537197, 1883.8803064545],
    [0.00000007633, 3.38390891932, 295.4380584896],
    [0.00000006841, 4.70448684705, 329.9690092644],
    [0.00000005996, 0.45212858596, 334.7949344048],
    [0.00000005926, 5.70772732719, 2737.0766882065],
    [0.00000006244, 1.25838362517, 533.1161763158],
    [0.00000006129, 6.20652183177, 215.8305347819],
    [0.00000006129, 4.966289642, 211.2552910611],
    [0.0000000597, 2.73707139983, 193.8991929485],
    [0.00000005955, 4.44190853399, 128.7124518316],
    [0.00000007108, 1.5633328969, 427.5927678849],
    [0.00000005852, 3.12332782599, 273.8222308413],
    [0.00000005748, 2.79144830935, 30.7756711535],
    [0.0000000647, 5.2548473929, 162.3371875903],
    [0.0000000561, 3.91723617761, 53.93085326429],
    [0.00000005595, 3.37029838635, 2530.8911397693],
    [0.00000006286, 0.9402861199, 432.9923475138],
    [0.00000005905, 2.50849975026, 856.62159297321],
    [0.0000000542, 4.38832321197, 692.831301837],
    [0.00000007291, 2.45742729955, 611.1992808273],
    [0.00000005368, 1.14023208744, 113.89465699899],
    [0.00000006762, 2.27424506141, 421.212934067],
    [0.0000000629, 0.3259113564, 240.36961586451],
    [0.00000006519, 4.14721310745, 1052.02456570489],
    [0.00000005326, 5.94411846893, 258.6319289932],
    [0.00000005918, 3.85830083228, 422.64922266551],
    [0.00000005209, 2.18808663209, 137.2768416459],
    [0.00000005766, 4.77462627159, 272.85902299479],
    [0.00000006291, 4.79715993624, 423.9212470527],
    [0.00000005107, 2.89180118566, 255.1874106971],
    [0.00000006557, 0.12504746114, 100.1551979644],
    [0.00000005736, 2.24104597943, 252.8997888367],
    [0.00000005147, 1.21443168596, 489.0934339546],
    [0.00000005331, 2.09555876606, 21.0968235189],
    [0.00000005351, 4.27893371942, 342.4991822366],
    [0.000000049, 2.79017690768, 533.8669358412],
    [0.00000006324, 4.29118767258, 108.0024581481],
    [0.0000000612, 1.05577091641, 472.4186593982],
    [0.00000004858, 2.21950314401, 29.44876501211],
    [0.00000006153, 3.06707334061, 125.743506415],
    [0.00000004774, 1.45632160902, 394.5986794451],
    [0.00000005096, 4.95196720627, 24.1352049047],
    [0.00000004756, 2.19681205319, 1898.5950354231],
    [0.00000005064, 0.32711706674, 1905.2209474569],
    [0.00000004696, 5.96778289674, 408.19512612779],
    [0.00000005004, 3.21047421953, 650.436044536],
    [0.00000004561, 3.08971667737, 518.8890823142],
    [0.00000005108, 1.63505259163, 1471.9968445471],
    [0.00000004597, 0.8512784243, 291.5059052265],
    [0.00000004502, 3.81171113315, 167.9662618828],
    [0.00000004559, 1.7260413775, 418.76525351221],
    [0.00000006043, 1.6249015453, 405.0137323901],
    [0.00000005079, 5.93549950926, 264.7486382527],
    [0.00000005333, 5.77629318787, 486.64575339981],
    [0.0000000544, 2.06417795899, 230.2176874779],
    [0.00000005845, 3.88668079322, 551.27542358051],
    [0.00000005448, 4.69757339283, 2324.70559133209],
    [0.00000005131, 3.41222829468, 835.28095197081],
    [0.00000004374, 3.79830417186, 138.2736793872],
    [0.00000004471, 0.86757359303, 361.62163734781],
    [0.0000000441, 1.03727724858, 1140.8902459219],
    [0.00000004114, 0.51329977335, 1486.2239385487],
    [0.00000004269, 2.60295729376, 225.3223263683],
    [0.00000004269, 5.42826152642, 201.7634994747],
    [0.00000004076, 6.24795212185, 33.6964324603],
    [0.00000004308, 0.45279950263, 430.2865266556],
    [0.00000004392, 4.27597448362, 492.06237937121],
    [0.00000004365, 0.26068379315, 2840.1694624251],
    [0.00000004469, 5.64881997462, 428.32648106781],
    [0.00000004332, 3.80105116243, 32.48714639791],
    [0.00000004016, 5.36343302652, 425.35753565121],
    [0.00000004203, 2.42083154646, 364.5905827644],
    [0.00000003902, 2.7525740712, 397.63706083091],
    [0.00000003955, 4.2677160604, 850.25880549781],
    [0.00000003945, 6.13532982514, 2413.5712715491],
    [0.00000004359, 2.96124483199, 312.9666584354],
    [0.00000005325, 3.23562442738, 1169.34443392509],
    [0.00000004743, 1.50902113607, 1055.6935944096],
    [0.00000005334, 5.23788081233, 2427.7983655507],
    [0.00000003914, 2.20694290059, 504.8050006645],
    [0.0000000374, 4.88716400146, 658.30035106221],
    [0.00000004015, 1.57344232669, 526.2657538734],
    [0.00000003733, 1.21797191197, 174.9222423167],
    [0.00000003719, 0.83792596372, 292.2566647519],
    [0.00000004998, 1.43326576234, 448.9334088873],
    [0.00000003941, 1.19970132537, 434.0037394701],
    [0.00000003629, 6.1632739485, 1692.40948698591],
    [0.00000004488, 2.13061381956, 410.1672338031],
    [0.00000004487, 1.97829463327, 832.0995582331],
    [0.00000004724, 0.88455549663, 205.90810105891],
    [0.00000003566, 6.23327093123, 215.2398339509],
    [0.00000003566, 1.79794788895, 211.8459918921],
    [0.00000004241, 3.81199974644, 370.2196570569],
    [0.0000000374, 3.21504654325, 471.9310244312],
    [0.00000003762, 3.1257896683, 320.0802054362],
    [0.00000004157, 0.60528202242, 2119.00767786191],
    [0.00000003518, 0.26416908476, 33.3809182752],
    [0.00000003584, 5.79171536939, 77.9943614674],
    [0.00000003636, 4.51005837077, 406.23508054],
    [0.00000003529, 0.66209885167, 732.45130231059],
    [0.00000003573, 0.76302606907, 440.5814673941],
    [0.00000004086, 0.94506625757, 2200.2721761111],
    [0.00000004527, 0.86326378242, 221.17772478411],
    [0.00000003974, 2.85379501585, 16.9185920399],
    [0.00000003913, 4.12538485725, 189.96703968541],
    [0.00000003397, 4.45063317042, 245.2986068689],
    [0.00000003967, 5.18194728645, 120.74507944141],
    [0.00000003785, 5.04003954266, 215.1874443242],
    [0.00000003785, 6.13277193111, 211.8983815188],
    [0.00000003713, 1.92562812532, 203.5086046139],
    [0.00000003713, 6.10559069486, 223.5772212291],
    [0.00000003167, 1.49545356113, 224.8492456163],
    [0.00000003167, 0.25257995187, 202.2365802267],
    [0.00000004027, 2.28727319435, 38.3768531213],
    [0.00000003454, 0.92726421089, 542.78046973539],
    [0.000000037, 4.895759853, 170.2538837432],
    [0.00000003257, 3.14955384513, 305.85311143459],
    [0.00000003858, 4.45826332823, 135.5799206165],
    [0.00000003174, 3.30524903499, 340.52707456129],
    [0.00000003287, 1.32591701514, 10.051123255],
    [0.00000004371, 1.14794032361, 1045.3986536711],
    [0.0000000322, 0.30781065642, 629.846163059],
    [0.00000003146, 6.12951187669, 553.82616999929],
    [0.00000003544, 2.54076567072, 1066.2516597065],
    [0.00000004149, 6.00042687336, 136.78920667889],
    [0.00000004004, 2.56002623387, 494.510059926],
    [0.00000003653, 1.07325080538, 466.1988842747],
    [0.00000003162, 0.16615343726, 2221.6128171135],
    [0.00000003678, 1.45731309163, 418.2439886504],
    [0.00000003135, 1.98132169566, 409.4335206202],
    [0.00000003067, 2.46882469796, 441.8198618865],
    [0.0000000297, 5.5950141089, 731.70054278519],
    [0.00000003379, 0.76892622524, 237.11878615761],
    [0.000000031, 5.70739500607, 407.1982883865],
    [0.00000003007, 4.39247880899, 92.55401599659],
    [0.00000002898, 2.07796431043, 1080.9663886751],
    [0.0000000317, 1.03728235557, 105.76971804189],
    [0.00000002943, 4.30277427326, 256.08118257441],
    [0.00000003935, 3.710272062, 426.0912488341],
    [0.00000003326, 4.80847422754, 73.5409433425],
    [0.00000002837, 5.38571733028, 467.9988711681],
    [0.00000003336, 0.12937996666, 128.6093859676],
    [0.00000002896, 0.58823826825, 1802.6158082053],
    [0.00000002904, 0.36123693139, 6062.4193900691],
    [0.00000002774, 3.05473381967, 2847.28300942589],
    [0.00000002813, 2.69799483611, 84.6897094704],
    [0.00000003318, 1.86340648711, 254.6997757301],
    [0.0000000285, 5.39053439064, 220.7683345069],
    [0.0000000301, 3.47566151707, 451.2210307477],
    [0.00000003559, 1.86339595837, 519.15220687259],
    [0.00000003563, 2.7496973233, 486.1581184328],
    [0.0000000336, 2.57348311811, 388.70897272171],
    [0.00000002703, 3.67104853266, 345.08987514331],
    [0.00000002882, 0.29032835089, 511.2879003464],
    [0.00000003267, 5.09418923422, 543.2681047024],
    [0.00000003197, 5.3587374111, 54.89406111079],
    [0.00000002907, 0.41906230884, 630.5798762419],
    [0.00000002669, 2.23461202741, 815.3071635977],
    [0.00000002869, 0.079938019, 57.86300652739],
    [0.00000002764, 2.6731341264, 5635.8211991931],
    [0.0000000261, 5.5455351008, 857.3723524986],
    [0.00000002782, 0.10347092925, 639.177895951],
    [0.00000002826, 1.51658586855, 171.0046432686],
    [0.00000002568, 5.46900605123, 3053.46855786309],
    [0.00000002628, 1.75719236208, 9992.62908628869],
    [0.00000003266, 1.28369403361, 721.40560204669],
    [0.00000002545, 4.09883259215, 455.29619636271],
    [0.0000000251, 3.89386878011, 641.104311644],
    [0.00000002554, 5.33920988436, 738.814089786],
    [0.0000000292, 2.36151426705, 92.2908914382],
    [0.00000002992, 4.3809565198, 462.2667310116],
    [0.00000002474, 1.99548298969, 2214.98690507971],
    [0.00000002474, 1.50083275203, 419.77664546851],
    [0.00000002645, 3.34653267179, 1685.2959399851],
    [0.00000002597, 0.35423361548, 426.7301337749],
    [0.00000002936, 3.12370531281, 468.4865061351],
    [0.00000002535, 0.19690988756, 739.5648493114],
    [0.00000002575, 3.67638389113, 77.7191748215],
    [0.0000000296, 1.43272530301, 403.26613512341],
    [0.00000002526, 2.2857514232, 198.0774244275],
    [0.00000002819, 6.27705191381, 256.8319420998],
    [0.00000002444, 3.25740106622, 420.6916692052],
    [0.00000003165, 5.89068478002, 200.80029162821],
    [0.00000003165, 2.14053404016, 226.28553421481],
    [0.00000002684, 5.47533039513, 540.98048284201],
    [0.00000002447, 3.11720914436, 207.1801254461],
    [0.00000002447, 4.91400967582, 219.9057003969],
    [0.00000002485, 6.02271689683, 2729.96314120569],
    [0.0000000281, 1.60047864591, 297.9888049084],
    [0.00000002343, 1.03676860662, 402.4629859713],
    [0.0000000327, 1.82014094673, 714.92270236481],
    [0.00000002983, 2.84636794929, 1485.7363035817],
    [0.00000002301, 2.17881414725, 455.1531840108],
    [0.00000002295, 2.14340790418, 503.1080796351],
    [0.00000002789, 0.36073274237, 269.6776292571],
    [0.00000002298, 4.0753627009, 131.16013238639],
    [0.00000002626, 2.7273775478, 112.8978192577],
    [0.00000002273, 5.7513697044, 283.9047232587],
    [0.00000002621, 1.8236859618, 172.48911597691],
    [0.00000002285, 0.20921743314, 525.514994348],
    [0.00000002204, 0.87003863856, 593.67068088151],
    [0.00000002636, 0.30028112725, 649.7023313531],
    [0.00000002222, 6.06903250865, 478.0477336907],
    [0.00000002308, 0.82575212401, 1457.2821155785],
    [0.00000002203, 2.42859720355, 1596.43025976811],
    [0.00000002182, 1.34997153566, 397.14942586389],
    [0.00000002502, 0.7465328015, 9.3174100721],
    [0.00000002138, 5.57703162616, 2310.4784973305],
    [0.00000002142, 4.5101441436, 211.5708052462],
    [0.00000002974, 2.23240151481, 927.5911504839],
    [0.00000002136, 1.09576811823, 186.4555775476],
    [0.00000002091, 2.78262893204, 1258.6977491091],
    [0.00000002094, 4.08396200744, 5.1728084879],
    [0.0000000246, 2.08164520313, 5650.0482931947],
    [0.00000002461, 2.31536038396, 1382.64352936309],
    [0.00000002355, 5.5604283168, 184.3379653929],
    [0.00000002153, 5.44863811686, 233.1866328945],
    [0.00000002597, 5.04726142112, 426.9538829441],
    [0.00000002604, 5.2042655284, 980.91199584231],
    [0.00000002201, 2.69689845951, 434.91876320681],
    [0.00000002162, 4.51403145252, 1383.13116433011],
    [0.00000002404, 3.51511061541, 9580.2579894143],
    [0.0000000226, 4.1112797578, 42.78208713641],
    [0.00000002151, 6.08523383456, 487.60896124631],
    [0.00000002123, 1.99177130106, 149.3193796511],
    [0.00000002556, 4.74909112241, 142.20583265029],
    [0.00000001998, 5.68001469591, 724.5869957844],
    [0.00000001973, 2.53052550367, 481.01667910731],
    [0.00000001973, 6.13759453722, 348.8790160545],
    [0.00000001957, 0.5105429373, 28.5549931348],
    [0.00000001957, 3.65213559089, 28.0673581678],
    [0.00000001991, 5.56250823493, 298.4764398754],
    [0.0000000194, 5.03410941079, 141.46962733991],
    [0.00000002507, 5.6512007016, 6489.5052159121],
    [0.00000002352, 4.19836125385, 479.044571432],
    [0.00000002048, 1.46373921871, 1788.38871420371],
    [0.00000002647, 4.98237868701, 2744.1902352073],
    [0.00000001908, 3.37818588512, 1368.9040703285],
    [0.000000019, 6.21516760726, 271.6497369324],
    [0.00000002178, 3.04872277319, 254.5967098661],
    [0.00000001894, 0.3852666449, 1048.8431719672],
    [0.00000001892, 4.53251590605, 49.26498681829],
    [0.00000001888, 0.97996534938, 642.58878435231],
    [0.00000002182, 4.42761937882, 427.0544566806],
    [0.0000000181, 6.24932174424, 518.40144734719],
    [0.00000001925, 6.21686018138, 3156.5613320817],
    [0.00000002022, 5.64661364195, 4.4220489625],
    [0.00000001793, 3.43045021055, 419.6802772489],
    [0.00000002336, 0.7934633733, 10419.7149121317],
    [0.00000001992, 2.92479817252, 16.4309570729],
    [0.0000000179, 4.60289486851, 71.8440223131],
    [0.00000001779, 2.30415626764, 702.3925293926],
    [0.00000001796, 3.79385866271, 240.6302482954],
    [0.00000001974, 0.40863452127, 640.1892879073],
    [0.00000001881, 2.58502310856, 200.52510498229],
    [0.00000001773, 0.91523739118, 990.47322339791],
    [0.00000002183, 0.33182574262, 411.3765198655],
    [0.0000000225, 0.80555474376, 6077.1341190377],
    [0.00000002182, 0.97387565779, 426.6295600384],
    [0.00000001835, 1.94831932983, 163.1403367424],
    [0.00000002428, 4.54827834066, 2641.0974609887],
    [0.00000001996, 1.88608745432, 398.38782035631],
    [0.00000001813, 1.0398017918, 25.516611749],
    [0.0000000198, 6.08475811682, 206.54124050531],
    [0.0000000194, 0.0475337565, 774.7264474051],
    [0.0000000191, 4.61558010626, 175.6705097146],
    [0.00000002379, 3.5753552419, 594.8945211589],
    [0.00000002068, 4.09042241645, 183.85033042589],
    [0.00000001733, 3.39710168703, 705.36147480921],
    [0.00000001824, 0.43158734549, 420.2497262205],
    [0.00000001804, 4.09117978828, 9566.03089541269],
    [0.00000002037, 3.95444170699, 481.97988695381],
    [0.00000001792, 1.26659627713, 842.65762352999],
    [0.00000001681, 2.53871998999, 1575.08961876571],
    [0.00000001732, 1.55363228273, 692.34366686999],
    [0.00000001698, 4.90525724103, 355.50492808829],
    [0.00000001828, 4.98959403756, 484.9488323704],
    [0.00000001713, 1.30182253021, 457.8614969965],
    [0.00000001808, 2.75209469281, 622.2449810912],
    [0.00000001911, 3.61821751946, 5165.60650620771],
    [0.00000001704, 6.23318457567, 2538.00468677009],
    [0.00000001688, 6.03910121927, 267.22994870229],
    [0.00000001665, 5.37698735936, 1127.50624756031],
    [0.00000002097, 2.22788409731, 10007.3438152573],
    [0.00000001691, 2.07854652969, 789.7043009321],
    [0.00000001699, 0.77916428304, 760.4993534035],
    [0.00000001783, 3.13574966388, 2001.68780964171],
    [0.00000001796, 4.27766403083, 1194.21109128031],
    [0.00000001619, 3.01440438125, 189.47940471839],
    [0.00000001652, 2.95148116143, 152.77596003471],
    [0.00000001707, 5.77147938366, 3046.3550108623],
    [0.00000001924, 0.43738095399, 380.37158544351],
    [0.0000000196, 3.34806236291, 144.1779403256],
    [0.00000001599, 5.99560668065, 2008.8013566425],
    [0.00000001804, 0.11881932366, 353.5448825005],
    [0.00000001586, 0.2039822899, 6069.53293706989],
    [0.00000001644, 1.16840005853, 1112.3159457122],
    [0.00000001572, 4.52460985815, 91.54262404029],
    [0.00000002123, 2.62748087622, 1802.12817323829],
    [0.00000001948, 4.60996708702, 268.68079151581],
    [0.00000001766, 4.9056716777, 3333.7426971825],
    [0.00000001565, 0.79981986869, 97.9199657307],
    [0.00000001602, 4.7322106844, 490.09027169589],
    [0.00000001546, 2.42254478872, 258.78949556011],
    [0.00000001724, 3.10736186704, 26081.03341205689],
    [0.00000001531, 4.39157176653, 5216.33655531789],
    [0.00000001619, 1.87855507272, 784.28767496071],
    [0.00000001871, 0.40711466948, 206.3174913361],
    [0.00000001734, 0.20470303542, 304.84171947829],
    [0.00000001732, 6.00632565407, 1332.728588151],
    [0.00000001517, 5.25218074419, 1048.0924124418],
    [0.00000001563, 3.46526834018, 555.7982776746],
    [0.0000000152, 3.35489835249, 1101.2702454483],
    [0.00000001687, 4.36557051418, 3347.96979118411],
    [0.00000001488, 1.67143354747, 9999.7426332895],
    [0.00000001587, 0.21300456338, 372.77040347569],
    [0.00000001662, 2.56954470179, 26095.2605060585],
    [0.00000001724, 1.33166239973, 1037.7974717033],
    [0.00000001477, 4.36052585434, 208.3894115085],
    [0.00000001657, 1.83865415601, 552.829332258],
    [0.0000000152, 2.73911257161, 2318.0796792983],
    [0.00000001443, 1.98940467508, 910.0625505381],
    [0.00000001446, 1.10349996175, 204.9448932124],
    [0.00000001446, 0.64453355125, 222.14093263061],
    [0.0000000185, 3.7924286745, 699.94484883781],
    [0.00000001439, 4.66881004427, 393.70490756781],
    [0.00000001452, 6.27116384237, 1130.47519297691],
    [0.00000001874, 2.34112858987, 770.0605809591],
    [0.00000001782, 1.5444749873, 835.5440765292],
    [0.00000001639, 5.07308302027, 427.10264079041],
    [0.00000001565, 0.60414645629, 392.9017584157],
    [0.00000001395, 5.81501189133, 9146.54625153749],
    [0.00000001516, 3.58009173951, 397.9001853893],
    [0.00000001684, 6.24638766723, 1479.11039154791],
    [0.00000001659, 1.59176755278, 721.8932370137],
    [0.00000001514, 5.91645211455, 319.06881347989],
    [0.00000001397, 2.98224235085, 3163.6748790825],
    [0.00000001747, 2.2765640239, 37.88921815429],
    [0.00000001492, 3.0453183636, 263.9454891006],
    [0.00000001354, 4.57495887478, 140.2457870625],
    [0.00000001506, 0.27404631561, 251.4153161284],
    [0.00000001365, 4.69515666017, 694.31577454531],
    [0.00000001352, 4.48933959673, 60.79832204921],
    [0.00000001352, 4.48933959673, 60.3106870822],
    [0.00000001531, 0.64877553761, 907.0936051215],
    [0.00000001783, 0.81801801901, 185.08872491831],
    [0.0000000155, 4.05055802538, 170.51700830159],
    [0.00000001524, 0.1523486485, 921.3206991231],
    [0.00000001541, 2.73990779933, 31.73638687251],
    [0.00000001578, 5.98549196472, 190.6483632416],
    [0.00000001578, 5.18731950905, 236.4374626014],
    [0.00000001732, 0.64736011209, 1126.54303971381],
    [0.0000000154, 0.36379616132, 2833.0559154243],
    [0.00000001323, 4.87522768351, 460.7822583033],
    [0.00000001312, 5.10594513264, 448.98829064149],
    [0.00000001724, 5.39037296555, 78.4699343469],
    [0.00000001472, 4.26339575699, 34.1840674273],
    [0.00000001296, 5.62129859108, 2325.1932262991],
    [0.00000001309, 5.4552258058, 349.0914643756],
    [0.00000001818, 4.16411482533, 100.4012761803],
    [0.0000000129, 2.36413128544, 1176.9456158929],
    [0.00000001334, 2.44221382511, 282.9078855174],
    [0.00000001287, 0.2650470813, 286.8400387805],
    [0.00000001392, 4.87830155415, 69.12115511239],
    [0.00000001515, 3.62072467848, 12.28635548869],
    [0.00000001247, 4.64664167702, 187.67941782501],
    [0.00000001247, 0.24298448957, 239.40640801801],
    [0.00000001246, 1.79539178116, 2487.1722274643],
    [0.00000001511, 1.66615367049, 213.00709384469],
    [0.00000001479, 0.6880321882, 2516.66404576769],
    [0.00000001233, 1.65114888447, 2531.3787747363],
    [0.00000001632, 2.90714941935, 906.130397275],
    [0.00000001387, 0.55195474062, 401.569214094],
    [0.00000001352, 0.63301755055, 351.5727748252],
    [0.00000001313, 0.13852930132, 350.08830211689],
    [0.00000001236, 3.39882375572, 11926.01059618529],
    [0.00000001227, 5.24375477429, 4127.5652170209],
    [0.00000001304, 0.28979853169, 203.49405039889],
    [0.00000001478, 4.80872386721, 264.2610032857],
    [0.00000001254, 6.19414707054, 827.67977000299],
    [0.0000000123, 2.44616325751, 51535.66517935089],
    [0.00000001385, 4.26128512958, 41.2976144281],
    [0.00000001364, 4.18584755012, 65.46418849521],
    [0.00000001395, 2.64686968582, 629.35852809199],
    [0.00000001284, 5.37115714123, 168.2963302829],
    [0.00000001435, 5.84382021042, 617.5620683027],
    [0.00000001411, 5.88687181276, 188.270118656],
    [0.00000001191, 0.70400726689, 606.5163680388],
    [0.00000001193, 1.7796728642, 274.30986580831],
    [0.00000001197, 2.05343251093, 1062.80714141041],
    [0.00000001356, 1.22316379022, 50.6463936626],
    [0.00000001356, 4.36475644381, 50.15875869559],
    [0.00000001276, 0.30928416823, 2090.06585489169],
    [0.00000001195, 2.85953206146, 681.2979666061],
    [0.00000001603, 1.64227556935, 1560.3748897971],
    [0.00000001191, 3.68583487315, 9594.99527173989],
    [0.00000001168, 1.08249837425, 74.3947687319],
    [0.00000001165, 4.67802137668, 674.1844196053],
    [0.00000001242, 5.63232378165, 1902.5271886862],
    [0.0000000133, 0.04908988755, 200.27902676641],
    [0.0000000133, 1.69894362545, 226.80679907661],
    [0.00000001154, 1.32466818176, 2847.77064439291],
    [0.0000000115, 5.63834183266, 17.6523052228],
    [0.00000001152, 1.9267063299, 740.0524842784],
    [0.00000001247, 5.13783491688, 348.3913810875],
    [0.00000001387, 5.73885801869, 527.4871020233],
    [0.0000000125, 1.98100336387, 184.6010899513],
    [0.00000001328, 4.49802504301, 2957.48933064529],
    [0.00000001587, 1.96187033145, 1243.98302014049],
    [0.00000001176, 1.80593057083, 747.1660312792],
    [0.00000001223, 0.59493067511, 1773.6739852351],
    [0.00000001161, 0.01398952175, 2435.3995475185],
    [0.0000000157, 4.69885872763, 3060.5821048639],
    [0.00000001303, 3.48272421278, 393.2172726008],
    [0.00000001126, 0.75321492124, 305.10235190919],
    [0.00000001534, 1.87537098734, 81.9959506997],
    [0.00000001117, 4.6154620747, 526.00262931501],
    [0.00000001307, 5.84787741027, 72.090100529],
    [0.00000001114, 0.00680453, 25234.46294233869],
    [0.00000001118, 1.34292799669, 511.7755353134],
    [0.00000001242, 2.9725858935, 145.387226388],
    [0.00000001397, 4.30533366512, 336.5949212982],
    [0.00000001401, 2.28518305813, 2118.5200428949],
    [0.00000001139, 5.0167193365, 1055.2059594426],
    [0.00000001096, 3.93031837723, 739.30172475301],
    [0.00000001092, 1.7203397658, 234.3959189569],
    [0.00000001197, 0.70790588748, 306.34074640161],
    [0.00000001126, 5.90717690029, 1144.0716396596],
    [0.00000001351, 3.03970702934, 179.6026629777],
    [0.00000001165, 0.1381493896, 746.67839631219],
    [0.00000001167, 4.32162909656, 634.7244778261],
    [0.00000001121, 3.70393028752, 366.2875037938],
    [0.00000001051, 2.77078069512, 383.81610373959],
    [0.00000001053, 3.41928600573, 2107.96197759801],
    [0.00000001051, 2.99910636875, 10000.23026825651],
    [0.00000001288, 1.85993541573, 247.4831628653],
    [0.00000001045, 4.77749523511, 1680.87615175499],
    [0.0000000107, 5.830292495, 3472.9532017383],
    [0.00000001043, 5.10256961747, 151.5039356475],
    [0.00000001033, 1.59445268426, 6070.0205720369],
    [0.00000001282, 3.59113162781, 141.9427080919],
    [0.00000001167, 5.76598251731, 2920.8839653411],
    [0.000000011, 2.52155794298, 2634.47154895491],
    [0.00000001035, 5.3077136105, 3369.8604275197],
    [0.00000001091, 0.54826165686, 1314.5693408863],
    [0.00000001274, 3.38359403787, 691.3468291287],
    [0.00000001079, 4.20190952106, 1044.6478941457],
    [0.00000001085, 2.22740147584, 141.208994909],
    [0.00000001245, 5.83769374356, 179.9181771628],
    [0.00000001146, 0.33774172888, 220.54458533771],
    [0.00000001196, 3.17156910173, 1460.2003847578],
    [0.00000001136, 2.05466340621, 480.00777927849],
    [0.00000001119, 5.41354135574, 1534.9819833251],
    [0.00000001056, 3.62871723489, 437.40007365639],
    [0.00000001032, 2.3267590258, 184.97110483931],
    [0.00000001032, 2.56286714079, 242.11472100371],
    [0.00000001039, 2.32832376555, 1791.0824729744],
    [0.00000001061, 2.50615202413, 938.63685074779],
    [0.00000001123, 3.96404102873, 25668.17468021549],
    [0.00000001103, 5.86207947745, 210.60759739969],
    [0.00000001015, 4.054754868, 252.4121538697],
    [0.00000000979, 5.22245385112, 610.44852130189],
    [0.00000000979, 2.08086119753, 610.93615626891],
    [0.00000001043, 3.45408554292, 17.91542978119],
    [0.00000001128, 3.9235106948, 398.5308327082],
    [0.00000001035, 3.02168366647, 235.68919520349],
    [0.00000001072, 4.53150424448, 746.15463932291],
    [0.00000001131, 3.37345520465, 5481.9983758643],
    [0.00000000986, 5.28602240316, 192.448350135],
    [0.00000001287, 1.95273113714, 314.1880065853],
    [0.00000000973, 3.85435039011, 561.6904765255],
    [0.00000001298, 1.08374685926, 614.38067456499],
    [0.00000001151, 1.20704230584, 905.64276230799],
    [0.00000001279, 5.88520431436, 322.3678272966],
    [0.00000000963, 3.50426087646, 782.59075393131],
    [0.00000001064, 5.75961632886, 1372.3485886246],
    [0.00000000973, 3.52289496745, 24.6228398717],
    [0.00000001096, 5.06936627625, 731.92754532131],
    [0.0000000108, 6.27980868199, 2906.6568713395],
    [0.000000012, 2.31102641105, 195.6467902152],
    [0.00000000993, 1.95529510745, 6062.9070250361],
    [0.00000001039, 1.07426067099, 1159.0494931866],
    [0.00000000952, 2.30173432343, 239.8819808975],
    [0.00000001181, 0.98375947358, 1468.3278158424],
    [0.00000001137, 2.73354004808, 2.69149803831],
    [0.00000000941, 1.2357264341, 124.18959773749],
    [0.00000000942, 3.50129097588, 115.11600514891],
    [0.0000000102, 1.79568687186, 196.3805033981],
    [0.00000001065, 1.53835988752, 494.2348732801],
    [0.00000000945, 4.39156950811, 121.0082039998],
    [0.00000000941, 3.67244160492, 120.01136625851],
    [0.00000000996, 3.0686665416, 4863.4417305527],
    [0.00000001059, 4.47767598624, 25653.94758621389],
    [0.00000000936, 1.21580989528, 307.07445958451],
    [0.00000000986, 1.95558000476, 5842.0067476303],
    [0.00000001061, 3.92781056471, 418.97770183331],
    [0.00000000941, 5.52302459792, 97.17169833279],
    [0.00000001049, 3.59730911706, 416.79314583689],
    [0.00000000956, 2.39282306271, 141.4550731249],
    [0.00000000922, 4.97372856088, 1364.4842820984],
    [0.0000000109, 1.18314786349, 1151.93594618579],
    [0.00000000945, 5.48577517665, 220.8689082434],
    [0.00000000945, 2.54544364353, 206.2169175996],
    [0.00000000906, 2.01210100437, 12779.6946129043],
    [0.00000000913, 6.0681237728, 285.61619850311],
    [0.00000000993, 0.00718300554, 73.0533083755],
    [0.00000000923, 3.95449289739, 1048.58004740881],
    [0.0000000091, 2.91944659858, 1250.83344258291],
    [0.00000001055, 2.96570583025, 287.6938641699],
    [0.00000000891, 4.95995674723, 4443.9570866775],
    [0.0000000089, 3.44861046216, 952.3401877601],
    [0.00000001011, 3.98082100593, 138.9043267061],
    [0.00000000943, 2.88169222264, 1368.4164353615],
    [0.0000000124, 2.96642006057, 105.7842722569],
    [0.0000000124, 2.96642006057, 105.2966372899],
    [0.00000000975, 1.4283724753, 700.90805668431],
    [0.00000000963, 2.83983881025, 5378.90560164571],
    [0.00000001131, 3.4920733891, 640.0929196877],
    [0.00000001014, 3.84499571511, 246.68001371321],
    [0.00000000922, 3.37907074746, 9772.21644384989],
    [0.00000000896, 4.5240706926, 1571.1574655026],
    [0.00000001121, 5.34360557183, 6467.68194047809],
    [0.00000000872, 2.88021294314, 519.63984183961],
    [0.00000001164, 0.08165804323, 739.0410923221],
    [0.0000000109, 2.12969540273, 1699.0353990197],
    [0.0000000118, 2.44363933993, 636.47207509279],
    [0.00000000912, 4.11625838132, 31.2633061205],
    [0.00000000892, 3.93430854425, 212.579705075],
    [0.00000000892, 3.93430854425, 212.092070108],
    [0.00000000985, 5.09403476262, 988.0255428431],
    [0.0000000086, 4.51926390946, 1585.38455950421],
    [0.0000000099, 0.10745457981, 3149.44778508089],
    [0.00000001177, 0.16333880643, 1328.79643488791],
    [0.00000000864, 1.23920060185, 12146.42323862409],
    [0.00000001007, 2.26868943041, 685.2301198692],
    [0.00000001007, 5.410282084, 685.7177548362],
    [0.00000000853, 5.50195803246, 2641.5850959557],
    [0.00000000993, 2.58838169596, 2111.8941308611],
    [0.00000000844, 4.99931164886, 1239.78774231901],
    [0.00000000846, 3.1754890305, 2115.0755245988],
    [0.00000000964, 2.75317670197, 756.56720014041],
    [0.00000000981, 1.46114906045, 1471.2460850217],
    [0.00000001164, 6.03626063674, 3391.68870348911],
    [0.00000000885, 3.21468341749, 609.1216151605],
    [0.00000000821, 0.43214580939, 388.2213377547],
    [0.00000000906, 2.38644851609, 327.19375243699],
    [0.00000000903, 3.04044650688, 477.2445845386],
    [0.00000000841, 3.88859140273, 473.31243127551],
    [0.00000000904, 0.75775511775, 635.4752373515],
    [0.00000000822, 0.09352704461, 1365.23504162379],
    [0.00000000997, 0.25000097268, 123.2958258602],
    [0.00000000879, 5.5452828346, 3362.74688051889],
    [0.00000000846, 1.99050608386, 227.81819103291],
    [0.00000000846, 6.04071273632, 199.26763481011],
    [0.00000000947, 4.80416752233, 222.6165055101],
    [0.00000000875, 3.4868642248, 9993.1167212557],
    [0.00000001117, 0.69343471577, 319.0833676949],
    [0.000000008, 5.83577165546, 834.7933170038],
    [0.00000000839, 6.01134529585, 206.64181424181],
    [0.00000000839, 2.01987352433, 220.44401160121],
    [0.00000000838, 3.26925163574, 2442.5130945193],
    [0.0000000083, 2.56385471112, 1891.4814884223],
    [0.00000000841, 1.50960565043, 60.04756252381],
    [0.00000000826, 3.67482294787, 220.1351950605],
    [0.00000000854, 1.21615128625, 540.2297233166],
    [0.00000000842, 5.83341675596, 2854.3965564267],
    [0.00000000858, 5.69541304884, 781.8399944059],
    [0.0000000086, 2.63629505046, 5436.7491977567],
    [0.00000000785, 2.62141651385, 3494.2938427407],
];

const X2: &[Term] = &[
    [0.0086272193, 2.44701762869, 213.5429129215],
    [0.00611630287, 2.28479450822, 0.2438174835],
    [0.00561413805, 1.25489421778, 206.42936592071],
    [0.0054727137, 3.61668298145, 220.6564599223],
    [0.00234984093, 2.44660941367, 426.8420083595],
    [0.00088108317, 4.86838582414, 7.3573644843],
    [0.00050142527, 2.69730354414, 433.9555553603],
    [0.00045054746, 0.35338915884, 419.72846135871],
    [0.00033335009, 1.58127217455, 640.1411037975],
    [0.00027185514, 3.49604874733, 227.77000692311],
    [0.00018651786, 0.02912884251, 213.0552779545],
    [0.00012946617, 1.40691297654, 199.3158189199],
    [0.00010383025, 4.75910342894, 14.47091148511],
    [0.00006684574, 5.66699712629, 110.45013870291],
    [0.00004661903, 1.83447973785, 647.25465079831],
    [0.00004933834, 3.08177201518, 216.72430665921],
    [0.00004778577, 1.81292692641, 210.36151918381],
    [0.00004377928, 5.2402578861, 316.6356871401],
    [0.00003532396, 0.77695513689, 853.4401992355],
    [0.00002688895, 3.15397291653, 209.6107596584],
    [0.00002540548, 2.64953783571, 441.06910236111],
    [0.00002540549, 1.72979147362, 217.4750661846],
    [0.00002506252, 4.68668320836, 117.5636857037],
    [0.00002582753, 1.59861873487, 103.3365917021],
    [0.00002111683, 0.27536451133, 633.0275567967],
    [0.00002306046, 3.67686226266, 205.9417309537],
    [0.00001843706, 3.97050945214, 323.74923414091],
    [0.00001272298, 0.25661618943, 412.6149143579],
    [0.00000940336, 0.85421668175, 6.86972951729],
    [0.0000080498, 3.35669822169, 234.8835539239],
    [0.00000698973, 5.48447806995, 95.7354097343],
    [0.0000065301, 3.44302214541, 198.82818395289],
    [0.00000766827, 1.08680299509, 202.4972126576],
    [0.00000662176, 5.13243854047, 426.3543733925],
    [0.00000565841, 6.26658788528, 220.16882495529],
    [0.00000765788, 3.85596138373, 224.5886131854],
    [0.00000672412, 1.14437192898, 309.5221401393],
    [0.00000490992, 4.81907666832, 109.9625037359],
    [0.00000440264, 3.59515263445, 330.8627811417],
    [0.00000426768, 0.70988535006, 11.2895177474],
    [0.00000427613, 1.00345444265, 860.55374623631],
    [0.00000505832, 4.26386101303, 309.0345051723],
    [0.00000559499, 3.55753813954, 102.84895673509],
    [0.00000439569, 4.61666678676, 21.5844584859],
    [0.00000404335, 2.95264099159, 223.83785366],
    [0.00000400108, 2.21768387014, 430.02340209721],
    [0.00000338086, 0.01109251698, 1066.7392946735],
    [0.00000310691, 4.43935743139, 3.42521122121],
    [0.0000035634, 2.07173270088, 422.9098550964],
    [0.00000268315, 5.61477011539, 88.6218627335],
    [0.00000265067, 1.09651380636, 423.66061462181],
    [0.00000249792, 3.78368875676, 4.1759707466],
    [0.00000244377, 1.8178224805, 654.3681977991],
    [0.0000030565, 3.17709889511, 419.2408263917],
    [0.0000026349, 3.3279941383, 124.6772327045],
    [0.00000243362, 1.58340419486, 96.2230447013],
    [0.00000228016, 3.15581836524, 522.3336006103],
    [0.00000208205, 1.59689210791, 192.2022719191],
    [0.00000262941, 3.8199898424, 522.8212355773],
    [0.00000217559, 2.12737362973, 412.12727939089],
    [0.00000204218, 2.31819875139, 149.8070146181],
    [0.00000207097, 2.04294057461, 625.9140097959],
    [0.00000226266, 2.00241821857, 203.247972183],
    [0.00000164818, 2.78185091937, 537.0483295789],
    [0.00000154166, 2.09392737387, 302.40859313851],
    [0.00000159821, 5.14771420694, 529.9347825781],
    [0.00000127987, 3.10053496626, 515.2200536095],
    [0.00000150521, 4.33804123124, 301.9209581715],
    [0.00000109809, 2.44188223375, 277.2788112249],
    [0.00000107126, 4.17749068544, 10.538758222],
    [0.00000125246, 3.27781318747, 437.8877086234],
    [0.00000119913, 4.03198023861, 625.42637482889],
    [0.0000009587, 0.5553655037, 13.9832765181],
    [0.00000093192, 1.91525183876, 430.7741616226],
    [0.00000082653, 2.55387341854, 448.1826493619],
    [0.00000080395, 4.59254494799, 231.70216018621],
    [0.00000086059, 4.21228581841, 742.74624304909],
    [0.00000078439, 3.94622515922, 415.7963080956],
    [0.00000095719, 0.39732138114, 846.3266522347],
    [0.00000069822, 2.9330239847, 838.72547026689],
    [0.00000088159, 4.69429588352, 743.23387801611],
    [0.00000062703, 1.89462060621, 728.5191490475],
    [0.00000061768, 5.02462718406, 3.6883357796],
    [0.00000059007, 0.78786498806, 316.14805217309],
    [0.00000057483, 5.15275075778, 18.40306474821],
    [0.00000068064, 2.90200859132, 736.1203310153],
    [0.00000073156, 3.00215539369, 735.6326960483],
    [0.00000066143, 5.32689397063, 529.44714761109],
    [0.00000046643, 2.8282871205, 831.6119232661],
    [0.00000046381, 2.73650889523, 544.1618765797],
    [0.00000049127, 3.98526295508, 515.70768857651],
    [0.00000045075, 3.61480562395, 195.38366565681],
    [0.00000045874, 0.00322886163, 408.68276109481],
    [0.00000039597, 0.18910102232, 1073.85284167431],
    [0.00000037898, 5.19338156968, 1059.6257476727],
    [0.00000044466, 3.71987438426, 941.8182444855],
    [0.00000034788, 1.53042898513, 363.1061100561],
    [0.00000032598, 5.38947358762, 433.46792039329],
    [0.00000033292, 3.55448256672, 191.7146369521],
    [0.00000041206, 4.06677518336, 618.3128278281],
    [0.00000032714, 3.96597866859, 1059.1381127057],
    [0.00000041218, 1.19485367697, 636.2089505344],
    [0.00000036847, 0.14902811646, 223.1041404771],
    [0.00000028979, 4.45566358804, 113.6315324406],
    [0.00000030445, 5.99732067739, 56.3785338191],
    [0.00000038514, 2.16683520575, 86.07111631471],
    [0.00000033922, 2.16638658532, 437.136949098],
    [0.0000002974, 5.33246443349, 270.1652642241],
    [0.00000034418, 1.38531328883, 643.32249753521],
    [0.0000003192, 2.71809642095, 337.9763281425],
    [0.00000035309, 4.6477736159, 203.9816853659],
    [0.00000026923, 2.72104940113, 131.79077970531],
    [0.00000026272, 2.14472258006, 750.3474250169],
    [0.0000002594, 1.96359688358, 76.50988875911],
    [0.00000029423, 5.51595511461, 1280.0383901115],
    [0.00000026782, 2.69721459229, 1155.1173399235],
    [0.00000024375, 5.77172279789, 81.50831573269],
    [0.00000025294, 4.58498242616, 483.4643596621],
    [0.00000023209, 1.00054709783, 867.6672932371],
    [0.00000022169, 0.86121660984, 288.32451148881],
    [0.00000023117, 6.14239842522, 227.2823719561],
    [0.0000002135, 3.80984077151, 160.852714882],
    [0.00000022067, 1.65390020558, 1044.9110187041],
    [0.00000022088, 2.09313761105, 70.6056278207],
    [0.00000020601, 2.14444325102, 22.3352180113],
    [0.00000020035, 2.56955927602, 1148.00379292269],
    [0.00000026634, 2.72752998143, 1052.02456570489],
    [0.00000020249, 1.0882821397, 416.547067621],
    [0.00000019318, 0.56867565113, 497.69145366371],
    [0.00000017591, 0.47058042874, 629.0954035336],
    [0.00000018938, 3.01811688461, 107.2687449652],
    [0.00000021595, 5.64697422334, 490.5779066629],
    [0.00000020105, 2.11272613285, 839.2131052339],
    [0.00000021565, 4.03058232828, 956.53297345411],
    [0.00000016938, 2.88265146092, 89.10949770051],
    [0.00000016497, 4.71187682763, 106.5179854398],
    [0.0000002136, 5.07283473961, 845.8390172677],
    [0.00000019384, 3.45868972702, 1258.21011414209],
    [0.00000015417, 3.16624042233, 241.9971009247],
    [0.00000016591, 4.54165521178, 639.6534688305],
    [0.00000016177, 6.04286742202, 344.9468627914],
    [0.00000014854, 1.11858145356, 266.233110961],
    [0.00000019063, 2.07999478622, 201.01273994931],
    [0.00000018723, 2.8000475314, 226.07308589371],
    [0.00000018567, 6.15802064616, 142.6934676173],
    [0.00000014166, 3.57626351086, 632.5399218297],
    [0.00000017119, 0.83663196525, 352.06040979221],
    [0.00000018888, 2.63389139857, 52.446380556],
    [0.00000013506, 4.0396393405, 138.76131435421],
    [0.00000017909, 3.76988751681, 934.70469748469],
    [0.00000013747, 2.11060380479, 359.173956793],
    [0.00000014401, 0.4233549096, 405.5013673571],
    [0.00000016878, 2.75966318459, 341.01470952831],
    [0.00000013527, 6.11265092399, 284.39235822571],
    [0.00000013436, 4.50317832794, 6290.4332144757],
    [0.00000012962, 0.85501464894, 181.2995840071],
    [0.00000015865, 2.58925256281, 651.1868040614],
    [0.00000013136, 2.14345131759, 6276.2061204741],
    [0.00000012088, 4.09973262355, 127.22797912329],
    [0.00000012658, 3.42538380158, 948.9317914863],
    [0.00000012303, 3.76145799738, 445.00125562421],
    [0.00000011905, 0.05199682564, 424.39432780471],
    [0.00000012624, 5.92655665827, 10220.6429106953],
    [0.00000012885, 3.7101152881, 1375.52998236229],
    [0.00000012454, 2.37524428293, 295.2950461377],
    [0.00000012341, 3.56682893682, 10206.4158166937],
    [0.00000011182, 4.71695359508, 209.12312469139],
    [0.0000001086, 2.79531710541, 350.5759370839],
    [0.00000010568, 5.88568250783, 12.77399045571],
    [0.00000010726, 5.64879100007, 703.8770021009],
    [0.00000013731, 0.78531914787, 636.95971005981],
    [0.00000011066, 2.49843137169, 1471.50920958009],
    [0.00000010568, 4.02434153212, 245.7862418359],
    [0.00000011834, 5.61242569644, 191.45151239371],
    [0.00000013045, 2.99603652801, 323.2615991739],
    [0.00000012746, 3.09998912111, 729.0067840145],
    [0.00000011214, 2.2609195179, 618.8004627951],
    [0.00000011539, 0.54965317551, 75.0254160508],
    [0.00000012236, 4.46231008485, 294.80741117069],
    [0.00000009934, 4.15810018234, 209.87388421679],
    [0.00000010182, 5.59563792015, 235.6343134493],
    [0.00000009148, 2.31017574698, 1464.3956625793],
    [0.00000009436, 3.25931284572, 508.10650660869],
    [0.00000008422, 1.74868225923, 661.4817447999],
    [0.00000008359, 1.43667117664, 1361.3028883607],
    [0.00000008253, 0.86562358245, 565.35950523021],
    [0.00000009478, 2.1216678438, 949.4194264533],
    [0.00000010785, 2.48347595884, 1368.4164353615],
    [0.00000008229, 3.53945903151, 5849.1202946311],
    [0.00000007715, 0.79383137585, 10.8018827804],
    [0.0000000847, 3.01956396957, 1052.51220067191],
    [0.00000007922, 5.89929744937, 5863.3473886327],
    [0.00000007332, 2.8016306911, 404.7506078317],
    [0.00000007694, 4.96303865474, 9779.32999085069],
    [0.00000008936, 3.18123904182, 1574.6019837987],
    [0.00000009236, 4.82991847781, 1162.23088692429],
    [0.00000007408, 1.03969580778, 9793.5570848523],
    [0.00000007006, 0.72365973561, 208.8770464755],
    [0.00000008885, 3.49149089495, 1251.0965671413],
    [0.00000006858, 1.01645145725, 218.2087793675],
    [0.00000006727, 0.58555082022, 313.4542934024],
    [0.00000006237, 2.16585608727, 319.8170808778],
    [0.0000000644, 5.35585173212, 429.28968891431],
    [0.00000008565, 3.30273694005, 6283.3196674749],
    [0.00000007708, 5.79722814055, 621.98185653281],
    [0.00000006384, 3.26113757491, 1265.32366114289],
    [0.00000007986, 4.72604674713, 10213.5293636945],
    [0.00000005697, 5.81066083045, 121.4958389668],
    [0.00000005771, 2.43214323984, 114.38229196601],
    [0.00000005568, 1.85852168121, 194.89603068979],
    [0.00000006666, 3.97400153538, 202.760337216],
    [0.00000006258, 0.27664464362, 117.0760507367],
    [0.00000005194, 6.09782391086, 842.3944989716],
    [0.00000005192, 6.26641739333, 78.9575693139],
    [0.00000006155, 5.15951383844, 196.1344251822],
    [0.00000005311, 5.92397473787, 956.04533848709],
    [0.00000006053, 2.87275161723, 230.9514006608],
    [0.00000006283, 3.9302447258, 63.49208081989],
    [0.0000000555, 3.50331649787, 1691.9218520189],
    [0.00000006169, 2.11657776036, 536.5606946119],
    [0.00000004641, 5.22350241766, 436.4032359151],
    [0.00000004643, 4.78610214245, 9.3174100721],
    [0.00000004944, 2.25390759795, 1787.9010792367],
    [0.00000004821, 2.05306967383, 644.0732570606],
    [0.00000004551, 2.00498534256, 757.4609720177],
    [0.00000004644, 4.49405917272, 9.8050450391],
    [0.00000004204, 0.80174207582, 576.4052054941],
    [0.00000004172, 0.63505087766, 251.6759485593],
    [0.00000004304, 1.0086043873, 289.8089841971],
    [0.00000004123, 4.15758653931, 175.40987728371],
    [0.00000004456, 2.99760258198, 824.4983762653],
    [0.00000005291, 4.58152433636, 1478.62275658089],
    [0.00000004026, 6.02985977936, 710.99054910171],
    [0.0000000528, 4.11176050624, 202.0095776906],
    [0.00000004248, 3.57017670015, 398.38782035631],
    [0.00000003877, 3.03469279117, 98.6561710411],
    [0.00000003948, 5.52901251368, 1589.3167127673],
    [0.00000004047, 2.10751405728, 1780.78753223589],
    [0.00000003924, 1.24978633707, 134.3415261241],
    [0.00000004377, 6.224866032, 10.051123255],
    [0.00000003858, 0.27422301004, 501.62360692681],
    [0.00000003847, 4.82150225291, 333.9011625275],
    [0.00000005256, 4.70444208702, 5856.23384163189],
    [0.00000005054, 1.2705822947, 479.532206399],
    [0.00000004175, 2.79949589454, 63.9797157869],
    [0.0000000415, 4.07784295914, 106.0303504728],
    [0.0000000376, 4.2587990443, 508.5941415757],
    [0.00000004966, 5.83309328873, 216.2366716922],
    [0.0000000488, 2.13206549479, 1684.80830501809],
    [0.00000004042, 6.1688280737, 120.1144321225],
    [0.00000004914, 6.12887362514, 9786.44353785149],
    [0.00000003672, 3.95123578303, 422.42222012939],
    [0.00000004671, 3.22550913459, 1567.48843679789],
    [0.00000003483, 5.20582592049, 348.1282565291],
    [0.000000037, 2.707831547, 416.059432654],
    [0.000000043, 2.91568424793, 1890.9938534553],
    [0.00000003599, 1.40195749079, 2.9375762542],
    [0.00000003544, 2.31276351688, 852.9525642685],
    [0.00000003267, 1.20456424957, 1677.6947580173],
    [0.00000003574, 5.94804944384, 156.9205616189],
    [0.00000003416, 1.75912124355, 167.07249000551],
    [0.00000003394, 3.09924705896, 196.2774375341],
    [0.00000003544, 2.13015052882, 114.6429243969],
    [0.00000003999, 3.2270163378, 326.9306278786],
    [0.00000003152, 1.19755571878, 151.2914873264],
    [0.00000003262, 5.70768338968, 1272.4372081437],
    [0.00000003054, 0.93612488497, 749.8597900499],
    [0.0000000335, 5.352335323, 212.579705075],
    [0.0000000334, 2.6818632318, 214.506120768],
    [0.00000003138, 0.69922169045, 320.5678404032],
    [0.00000003732, 4.18854031121, 611.1992808273],
    [0.00000003741, 0.62303283965, 849.5080459724],
    [0.00000003047, 1.79037915226, 230.8083883089],
    [0.00000003048, 5.94415826698, 21.0968235189],
    [0.00000002851, 4.73186877358, 6069.53293706989],
    [0.00000002864, 6.0913997811, 9999.7426332895],
    [0.00000002898, 2.37720286549, 213.4947288117],
    [0.00000002898, 5.65686211315, 213.5910970313],
    [0.00000002819, 6.19576518658, 431.5078748055],
    [0.00000003469, 4.96542567369, 526.7533888404],
    [0.00000003327, 3.1542199334, 1581.7155307995],
    [0.00000002927, 2.32768555098, 395.8225197225],
    [0.00000003762, 0.62502984773, 38.3768531213],
    [0.00000002893, 6.25258908606, 381.5954257209],
    [0.00000003707, 1.85956087078, 215.99059347631],
    [0.00000002804, 3.11861161896, 260.01333583751],
    [0.00000002799, 0.07347298152, 129.6756596781],
    [0.00000003378, 1.60714359099, 299.37021175271],
    [0.00000002783, 5.69238885511, 1287.15193711231],
    [0.00000003526, 6.21925842594, 211.09523236671],
    [0.00000002541, 5.29829781548, 414.31183538731],
    [0.00000002607, 3.83630269401, 276.79117625789],
    [0.00000002465, 1.10299698027, 572.473052231],
    [0.00000002461, 3.95494769587, 409.4335206202],
    [0.00000002462, 5.12829780057, 59.55992755679],
    [0.00000002579, 4.98684783023, 1493.3374855495],
    [0.00000002414, 5.95835828919, 343.4623900831],
    [0.00000002533, 3.91175931336, 696.7634551001],
    [0.0000000239, 5.50027750787, 1588.82907780029],
    [0.00000002433, 3.53308752088, 6070.0205720369],
    [0.00000002747, 3.63141908197, 216.9874312176],
    [0.0000000242, 4.62294661622, 45.3328335552],
    [0.00000002297, 2.6180322039, 99.6675629974],
    [0.00000002813, 5.66780576556, 422.1761419135],
    [0.00000002913, 2.14239548593, 551.27542358051],
    [0.0000000286, 5.75550548585, 69.3963417583],
    [0.00000002387, 3.66176528516, 1169.83206889211],
    [0.00000002258, 3.4252111555, 188.270118656],
    [0.00000002293, 4.30779033149, 98.91680347199],
    [0.00000002711, 4.38875028285, 1795.0146262375],
    [0.00000002337, 4.98618107601, 10000.23026825651],
    [0.00000002777, 1.92096933827, 100.1551979644],
    [0.00000003022, 4.27657430351, 190.9638774267],
    [0.00000002327, 2.43188651345, 143.9027536797],
    [0.00000002152, 4.96770554275, 189.1638905333],
    [0.00000002147, 5.81368882353, 265.745475994],
    [0.00000002162, 4.60033037919, 238.815707187],
    [0.00000002184, 4.98321991931, 917.1760975389],
    [0.00000002297, 5.88374894966, 533.1161763158],
    [0.00000002099, 3.6318013315, 275.7943385166],
    [0.00000002122, 0.04103472829, 93.1846633155],
    [0.00000002068, 3.90345993566, 221.61966776881],
    [0.00000002635, 4.32616395006, 646.76701583129],
    [0.00000002175, 5.63002332525, 432.471082652],
    [0.00000002049, 4.11329374307, 205.46615807421],
    [0.00000002103, 3.07406244371, 554.31380496631],
    [0.00000002036, 4.06354766916, 415.3086731286],
    [0.00000002045, 4.55001787181, 547.2002579655],
    [0.00000001996, 4.73453786942, 5642.93474619389],
    [0.00000002709, 2.90208204814, 174.1860370063],
    [0.00000002499, 3.91734791042, 927.5911504839],
    [0.00000002481, 2.24814867939, 91.8032564712],
    [0.00000002555, 1.49254264738, 196.8681383651],
    [0.00000002555, 0.25549086562, 230.2176874779],
    [0.00000002082, 3.81823920275, 832.0995582331],
    [0.00000002231, 2.05013884781, 2097.1794018925],
    [0.00000002095, 2.74501129194, 1140.8902459219],
    [0.0000000192, 1.50789835321, 99.40443843901],
    [0.0000000191, 2.52768436921, 106.7811099982],
    [0.00000002301, 3.33597408639, 2008.3137216755],
    [0.00000002228, 0.13234013389, 219.6932520758],
    [0.00000002219, 1.60488882515, 207.3925737672],
    [0.00000002444, 2.58833940963, 71.09326278771],
    [0.0000000195, 5.91966225582, 417.2807808039],
    [0.00000001941, 3.37602923994, 374.15181032],
    [0.000000019, 3.19545181564, 333.4135275605],
    [0.00000002353, 1.38929393306, 650.436044536],
    [0.00000001819, 3.03945359046, 120.74507944141],
    [0.00000001992, 1.6794176329, 2413.5712715491],
    [0.00000001805, 6.12365686072, 9573.14444241349],
    [0.00000002272, 6.07077392017, 135.5799206165],
    [0.00000001823, 5.32795961259, 425.878800513],
    [0.00000002143, 5.66066380057, 347.6406215621],
    [0.00000001841, 0.46818772275, 220.7046440321],
    [0.00000001834, 1.26884124633, 206.3811818109],
    [0.00000001777, 2.67341880565, 116.18227885939],
    [0.00000002138, 2.15400406449, 2104.2929488933],
    [0.00000001887, 4.94905172419, 556.7614855211],
    [0.0000000239, 0.57829722827, 856.62159297321],
    [0.00000001825, 1.86446865071, 345.08987514331],
    [0.0000000173, 6.28021453291, 237.9219353097],
    [0.00000002103, 2.59628252508, 2207.38572311189],
    [0.00000001779, 2.78871624346, 427.805216206],
    [0.00000001911, 2.02159497354, 145.874861355],
    [0.00000001811, 1.03042062457, 570.98857952271],
    [0.0000000171, 2.50465838575, 423.17297965479],
    [0.00000002261, 3.11062462322, 421.4253823881],
    [0.00000001681, 4.98403310748, 305.85311143459],
    [0.00000002093, 1.52224482636, 1169.34443392509],
    [0.00000002071, 2.14859681048, 942.3058794525],
    [0.00000001691, 2.43995589654, 455.29619636271],
    [0.0000000208, 3.36200869452, 405.0137323901],
    [0.00000001764, 2.79871492543, 186.71620997851],
    [0.00000001662, 5.22917796645, 305.5899868762],
    [0.00000001748, 3.36057980101, 899.0168502742],
    [0.00000001696, 1.59892728325, 85.1773444374],
    [0.00000002142, 1.99415297086, 2001.2001746747],
    [0.00000002282, 2.04372303495, 439.37218133171],
    [0.00000001748, 0.82946401625, 1066.2516597065],
    [0.00000001908, 6.13391971195, 131.6477673534],
    [0.00000001808, 2.51335072478, 1457.2821155785],
    [0.00000001794, 5.82136110186, 913.24394427581],
    [0.00000002167, 6.18131622353, 563.87503252191],
    [0.00000001602, 3.41843479847, 327.68138740401],
    [0.00000001891, 3.37025921442, 1155.6049748905],
    [0.00000002205, 1.14231592076, 388.70897272171],
    [0.00000001597, 5.72890255976, 281.210964488],
    [0.00000001719, 2.72910423965, 312.4429014461],
    [0.00000002158, 0.71647260532, 224.1009782184],
    [0.00000001659, 0.02762995097, 561.4273519671],
    [0.00000001737, 1.74569938692, 167.9662618828],
    [0.00000001501, 4.96905771055, 312.9666584354],
    [0.00000001587, 2.37695905463, 732.45130231059],
    [0.00000001488, 1.15017207061, 12.28635548869],
    [0.0000000146, 3.68257556907, 2627.3580019541],
    [0.00000001835, 4.46496396099, 206.47755003051],
    [0.00000001708, 5.28688437379, 82.13896305161],
    [0.00000001842, 3.55522181358, 220.60827581251],
    [0.00000001895, 5.04728306015, 291.5059052265],
    [0.00000001423, 0.90600055739, 225.3223263683],
    [0.00000001423, 0.84203295561, 201.7634994747],
    [0.00000001568, 0.17276009703, 685.7177548362],
    [0.00000001663, 2.39240670265, 3597.8742519263],
    [0.00000001491, 2.09091136066, 240.36961586451],
    [0.00000001913, 1.64595427075, 295.4380584896],
    [0.00000001496, 3.10700890764, 1045.3986536711],
    [0.00000001477, 5.34776911444, 440.5814673941],
    [0.0000000141, 3.852540184, 137.2768416459],
    [0.00000001748, 3.62192812061, 519.15220687259],
    [0.00000001325, 2.98811767557, 980.91199584231],
    [0.00000001352, 5.53324653057, 5429.63565075589],
    [0.00000001414, 6.21378141122, 1371.59782909919],
    [0.00000001697, 2.96957793002, 1898.10740045609],
    [0.00000001424, 3.32164076256, 721.40560204669],
    [0.00000001424, 3.32164076256, 721.8932370137],
    [0.00000001295, 5.37619224276, 1905.2209474569],
    [0.00000001272, 5.72341064428, 127.71561409031],
    [0.0000000174, 2.98134401594, 1883.8803064545],
    [0.00000001435, 1.83931362023, 699.94484883781],
    [0.0000000126, 0.96015330455, 850.25880549781],
    [0.00000001316, 0.48574200131, 1382.64352936309],
    [0.00000001303, 4.34276081528, 28.6980054867],
    [0.00000001701, 3.01361282532, 312.70353387701],
    [0.00000001245, 0.6736015365, 9359.84534697549],
    [0.0000000124, 1.28978443782, 1994.08662767389],
    [0.00000001286, 2.12726478428, 1048.8431719672],
    [0.0000000124, 0.05914920282, 148.32254190981],
    [0.00000001365, 2.52639842443, 212.79215339611],
    [0.00000001362, 5.50511551601, 214.2936724469],
    [0.00000001206, 2.2787385973, 739.5648493114],
    [0.00000001503, 3.64035751539, 1243.98302014049],
    [0.00000001305, 3.14322057429, 259.1195639602],
    [0.00000001167, 3.43763509907, 233.1866328945],
    [0.00000001167, 4.59358372111, 193.8991929485],
    [0.00000001155, 2.0947764402, 153.73916788121],
    [0.0000000122, 4.5097858101, 283.9047232587],
    [0.00000001153, 1.49807886709, 525.7419968841],
    [0.00000001188, 1.37272384469, 258.6319289932],
    [0.00000001558, 6.24300347417, 4216.4308972379],
    [0.00000001423, 2.20117675779, 2420.68481854989],
    [0.00000001138, 5.47453297293, 17.91542978119],
    [0.00000001133, 1.27426244635, 841.9068640046],
    [0.00000001109, 5.77014938471, 121.0082039998],
    [0.00000001109, 1.74252937792, 629.846163059],
    [0.00000001434, 2.33577168517, 6062.4193900691],
    [0.00000001122, 4.02937359406, 128.6093859676],
    [0.00000001123, 4.63883211615, 3178.38960805111],
    [0.00000001154, 5.8913820859, 67.91186905],
    [0.0000000113, 3.68532102062, 731.70054278519],
    [0.00000001305, 3.8234188227, 97.11681657861],
    [0.00000001248, 2.25171827957, 2523.7775927685],
    [0.00000001161, 3.8292035583, 81.9959506997],
    [0.00000001178, 2.27177304436, 1056.444353935],
    [0.00000001342, 0.90865804529, 355.99256305531],
    [0.00000001249, 3.35095586398, 526.2657538734],
    [0.00000001034, 6.13425127848, 777.17412795991],
    [0.00000001332, 3.33641634482, 835.5440765292],
    [0.00000001024, 4.46551378693, 5635.8211991931],
    [0.00000001173, 2.5936823021, 74.53778108379],
    [0.00000001173, 1.88536238484, 2317.5920443313],
    [0.00000001012, 4.43552013111, 215.2398339509],
    [0.00000001186, 4.99759781142, 1272.9248431107],
    [0.00000001049, 2.89184213238, 6062.9070250361],
    [0.00000001154, 1.74865938292, 2406.4577245483],
    [0.00000001062, 4.97332239252, 906.130397275],
    [0.00000001124, 2.1904666932, 3914.26612158291],
    [0.00000000993, 3.56282013143, 211.8459918921],
    [0.00000000986, 4.64695151983, 525.514994348],
    [0.00000000986, 1.18009463616, 602.00806815971],
    [0.00000000992, 1.73454490947, 306.34074640161],
    [0.00000001239, 2.83323142368, 2193.1586291103],
    [0.00000001134, 1.51692947764, 2729.96314120569],
    [0.00000001041, 0.96856014126, 945.7503977486],
    [0.00000001025, 4.65212942292, 32.48714639791],
    [0.00000001044, 3.13333997041, 472.4186593982],
    [0.00000001335, 3.23250354837, 2324.70559133209],
    [0.00000001199, 5.97883679965, 4113.3381230193],
    [0.00000001174, 6.24416585602, 1176.9456158929],
    [0.00000001213, 1.85427016032, 252.8997888367],
    [0.00000000973, 3.32855151003, 245.03548231051],
    [0.00000000973, 1.56107465656, 182.05034353251],
    [0.00000001167, 4.51079844988, 635.72131556739],
    [0.00000000936, 4.89205060352, 220.1351950605],
    [0.00000001073, 2.28404354413, 1773.6739852351],
    [0.00000000931, 3.12796311727, 206.9506307825],
    [0.00000000931, 4.22108011413, 1582.2031657665],
    [0.00000001237, 5.91198768163, 2964.60287764609],
    [0.00000001074, 3.43802549251, 738.814089786],
    [0.00000000976, 4.61137219155, 31.9995114309],
    [0.00000000907, 5.15190704681, 1802.6158082053],
    [0.00000000925, 4.33653627215, 3494.7814777077],
    [0.00000000999, 5.63756377401, 171.8984151459],
    [0.00000000931, 3.19108655615, 1037.7974717033],
    [0.00000001094, 2.2858813752, 2516.66404576769],
    [0.00000000949, 5.39859475117, 1809.72935520611],
    [0.00000000964, 4.14879961487, 2641.5850959557],
    [0.00000000947, 4.3717435521, 2111.40649589409],
    [0.00000000898, 5.87505951681, 9566.03089541269],
    [0.00000001029, 4.83213149276, 519.63984183961],
    [0.00000000989, 5.52532133338, 255.1874106971],
    [0.00000001003, 2.89315844222, 60.52313540329],
    [0.00000000886, 5.44090853481, 305.10235190919],
    [0.0000000092, 3.26822857927, 459.0853372739],
    [0.00000000888, 6.08377383987, 3259.6541063003],
    [0.00000000888, 6.08377383987, 3260.1417412673],
    [0.0000000096, 4.901649118, 84.6897094704],
    [0.00000000881, 5.34840991118, 397.9001853893],
    [0.00000000924, 0.50062273312, 731.92754532131],
    [0.0000000096, 4.40263473154, 5856.7214765989],
    [0.00000000886, 4.84941446555, 471.9310244312],
    [0.00000000909, 2.87462833456, 746.15463932291],
];

const X3: &[Term] = &[
    [0.00076886822, 2.95726755259, 206.42936592071],
    [0.00075865107, 1.87343394188, 220.6564599223],
    [0.00028377246, 3.86557149479, 0.2438174835],
    [0.00011451297, 0.52950959639, 426.8420083595],
    [0.00009043324, 0.90644151923, 433.9555553603],
    [0.0000741953, 1.78113005821, 227.77000692311],
    [0.00008292033, 3.07262247518, 7.3573644843],
    [0.00004421142, 2.2115751859, 419.72846135871],
    [0.00003519324, 3.11036333131, 199.3158189199],
    [0.00003064445, 5.96466087519, 640.1411037975],
    [0.00002363042, 3.04029814628, 14.47091148511],
    [0.00001027777, 0.00466674598, 647.25465079831],
    [0.00000789743, 0.89493947314, 441.06910236111],
    [0.00000810744, 1.272065605, 216.72430665921],
    [0.00000766386, 3.60274923273, 210.36151918381],
    [0.00000673097, 3.76715088659, 213.0552779545],
    [0.00000506614, 3.74427289102, 213.5429129215],
    [0.00000384956, 3.04387305073, 117.5636857037],
    [0.0000046354, 5.12353455374, 853.4401992355],
    [0.00000411246, 3.75278799309, 110.45013870291],
    [0.00000324142, 1.64931862119, 234.8835539239],
    [0.00000285917, 1.98200727487, 412.6149143579],
    [0.00000238406, 3.3228048993, 103.3365917021],
    [0.00000192441, 0.61468306333, 316.6356871401],
    [0.000001896, 5.4089280869, 6.86972951729],
    [0.0000018961, 2.26186337972, 633.0275567967],
    [0.00000213874, 5.57078419443, 205.9417309537],
    [0.00000153605, 2.27746123288, 323.74923414091],
    [0.00000154083, 2.88123748841, 21.5844584859],
    [0.00000130169, 1.38079516386, 209.6107596584],
    [0.00000121811, 5.19039452998, 198.82818395289],
    [0.00000112652, 4.50657670209, 220.16882495529],
    [0.00000109203, 3.33018599514, 217.4750661846],
    [0.00000111589, 5.41300222633, 860.55374623631],
    [0.00000097336, 0.97161200873, 95.7354097343],
    [0.00000114728, 1.16141976921, 223.83785366],
    [0.00000085497, 1.88744465241, 330.8627811417],
    [0.00000103793, 2.96083959404, 309.5221401393],
    [0.00000085243, 0.03105121395, 654.3681977991],
    [0.00000081972, 3.2916783828, 192.2022719191],
    [0.00000093735, 3.09844453957, 426.3543733925],
    [0.00000078232, 1.55716671048, 124.6772327045],
    [0.00000073732, 1.0519457285, 88.6218627335],
    [0.00000068659, 3.09861369147, 109.9625037359],
    [0.00000087657, 0.363851646, 430.02340209721],
    [0.0000005779, 1.70437193383, 224.5886131854],
    [0.00000050888, 3.0941349818, 202.4972126576],
    [0.00000048029, 3.83068266955, 302.40859313851],
    [0.00000057606, 3.83723480361, 203.247972183],
    [0.0000005696, 4.32645734701, 1066.7392946735],
    [0.00000045308, 3.25423824441, 96.2230447013],
    [0.00000048067, 6.08559382039, 309.0345051723],
    [0.00000036732, 0.80231221541, 448.1826493619],
    [0.00000038865, 3.77730274172, 625.9140097959],
    [0.00000043853, 0.20832317981, 422.9098550964],
    [0.0000003668, 5.09355802388, 13.9832765181],
    [0.00000035412, 5.54558308698, 522.8212355773],
    [0.00000030232, 3.87085631365, 412.12727939089],
    [0.00000034292, 6.06837760251, 301.9209581715],
    [0.00000025919, 5.31578501663, 4.1759707466],
    [0.00000026527, 3.52104928312, 423.66061462181],
    [0.00000023623, 4.82567426056, 515.2200536095],
    [0.00000017831, 5.24620312943, 11.2895177474],
    [0.00000017289, 0.98528821511, 537.0483295789],
    [0.00000016881, 5.38329398416, 195.38366565681],
    [0.00000013511, 5.72506783696, 515.70768857651],
    [0.00000012893, 1.12369483024, 437.8877086234],
    [0.00000011197, 2.55648325655, 742.74624304909],
    [0.00000013451, 5.19262853301, 522.3336006103],
    [0.00000010292, 0.86377999055, 337.9763281425],
    [0.00000011481, 5.27139699788, 191.7146369521],
    [0.00000011394, 5.93878680228, 625.42637482889],
    [0.0000001138, 4.58881936707, 1073.85284167431],
    [0.00000009884, 0.96968966802, 131.79077970531],
    [0.00000009268, 1.2859797375, 81.50831573269],
    [0.00000010374, 0.94317330721, 544.1618765797],
    [0.00000011913, 0.32742179509, 437.136949098],
    [0.00000008626, 3.66458258994, 728.5191490475],
    [0.00000008671, 4.32466808269, 419.2408263917],
    [0.00000008821, 4.57655314696, 831.6119232661],
    [0.00000008112, 0.50007270362, 149.8070146181],
    [0.00000009768, 5.81884437871, 618.3128278281],
    [0.00000008329, 5.47343196835, 867.6672932371],
    [0.00000007645, 2.3958591689, 846.3266522347],
    [0.00000008659, 5.79445660573, 643.32249753521],
    [0.00000007205, 4.39953882951, 227.2823719561],
    [0.00000007157, 5.63667649779, 636.2089505344],
    [0.00000007036, 2.63239333334, 231.70216018621],
    [0.00000007083, 4.84184174066, 89.10949770051],
    [0.00000006556, 2.67135559119, 743.23387801611],
    [0.00000005903, 0.87375775835, 270.1652642241],
    [0.00000006615, 3.63831273611, 433.46792039329],
    [0.00000006469, 2.05411382166, 408.68276109481],
    [0.00000005426, 1.51765079988, 241.9971009247],
    [0.00000005648, 2.55416366478, 529.9347825781],
    [0.00000007105, 3.01903914273, 18.40306474821],
    [0.00000005052, 5.18252086135, 416.547067621],
    [0.00000006189, 4.68404979693, 736.1203310153],
    [0.00000005821, 3.50616955116, 1280.0383901115],
    [0.00000005043, 3.76766161323, 277.2788112249],
    [0.00000004744, 1.46479508366, 56.3785338191],
    [0.00000005705, 4.87015493433, 430.7741616226],
    [0.00000005226, 5.29097572967, 415.7963080956],
    [0.00000005511, 3.59570699682, 529.44714761109],
    [0.0000000452, 2.36588968635, 1059.1381127057],
    [0.00000004583, 0.00787099904, 294.80741117069],
    [0.00000004789, 4.15071050239, 295.2950461377],
    [0.00000004026, 0.04020873612, 483.4643596621],
    [0.00000003728, 0.24380479533, 185.08872491831],
    [0.00000003578, 2.51284387407, 405.5013673571],
    [0.0000000389, 0.29060160988, 750.3474250169],
    [0.00000004291, 5.60521207533, 941.8182444855],
    [0.00000003758, 6.26818424862, 661.4817447999],
    [0.00000003547, 0.40358942005, 70.6056278207],
    [0.00000003641, 3.81013693999, 839.2131052339],
    [0.00000004196, 3.9769046427, 618.8004627951],
    [0.00000003709, 4.96509425454, 508.10650660869],
    [0.00000004193, 5.05036487395, 838.72547026689],
    [0.00000003571, 4.46056188614, 1148.00379292269],
    [0.00000003647, 5.59898306379, 934.70469748469],
    [0.00000002978, 3.43782247022, 1044.9110187041],
    [0.00000002876, 5.29356968989, 398.38782035631],
    [0.00000002643, 5.23820067295, 497.69145366371],
    [0.00000002725, 5.89016060143, 363.1061100561],
    [0.00000003246, 2.57150474119, 639.6534688305],
    [0.00000002721, 4.1456490453, 1464.3956625793],
    [0.00000002917, 2.38362703069, 113.6315324406],
    [0.0000000256, 4.95049691984, 729.0067840145],
    [0.0000000238, 6.24323945584, 86.07111631471],
    [0.00000002667, 0.09012233039, 10.8018827804],
    [0.00000002238, 2.2634162348, 10.538758222],
    [0.00000002305, 2.02658716121, 956.53297345411],
    [0.00000002316, 2.01244422105, 3.42521122121],
    [0.00000002282, 5.91510901442, 611.1992808273],
    [0.00000001988, 0.28661492755, 651.1868040614],
    [0.00000002365, 5.33155242941, 2111.40649589409],
    [0.00000002485, 4.32833388537, 316.14805217309],
    [0.0000000267, 0.63080955086, 196.1344251822],
    [0.0000000267, 1.11722396213, 230.9514006608],
    [0.00000001974, 3.29767644397, 1059.6257476727],
    [0.0000000244, 2.29714766763, 106.0303504728],
    [0.00000002032, 2.08292611476, 1375.52998236229],
    [0.00000002151, 4.69823758687, 824.4983762653],
    [0.00000001875, 1.50694339603, 344.9468627914],
    [0.0000000244, 1.3750487525, 323.2615991739],
    [0.00000002034, 5.64959382524, 927.5911504839],
    [0.0000000231, 4.84647061416, 99.6675629974],
    [0.00000001764, 1.86111058424, 191.45151239371],
    [0.00000002032, 3.74188450688, 636.95971005981],
    [0.00000001993, 5.41370582068, 1258.21011414209],
    [0.00000001921, 4.3005180539, 2641.0974609887],
    [0.0000000162, 5.90686570991, 1596.43025976811],
    [0.00000001903, 3.15206555826, 2634.47154895491],
    [0.00000001568, 3.03962897704, 235.6343134493],
    [0.00000001835, 0.46838409843, 536.5606946119],
    [0.00000001523, 4.48022908171, 956.04533848709],
    [0.00000002086, 1.63830662169, 445.00125562421],
    [0.00000001666, 1.70124586487, 1876.76675945369],
    [0.00000001479, 2.77539985198, 6290.4332144757],
    [0.00000001479, 5.26668359322, 5849.1202946311],
    [0.00000001439, 3.22610898757, 2538.4923217371],
    [0.00000001464, 4.18005026025, 5863.3473886327],
    [0.00000001464, 3.86203316672, 6276.2061204741],
    [0.00000001676, 5.34747324592, 1251.0965671413],
    [0.00000001945, 3.4854947858, 845.8390172677],
    [0.00000001436, 6.23499570787, 508.5941415757],
    [0.00000001481, 4.49861202018, 284.39235822571],
    [0.00000001709, 3.35714658968, 2318.0796792983],
    [0.00000001305, 4.10818846677, 107.2687449652],
    [0.00000001548, 2.81939196041, 2943.74987161071],
    [0.00000001465, 2.76905277973, 2531.3787747363],
    [0.00000001494, 3.94286053931, 1780.78753223589],
    [0.00000001243, 5.53319819376, 218.2087793675],
    [0.00000001234, 2.48191739575, 208.8770464755],
    [0.00000001359, 1.84182551916, 142.6934676173],
    [0.00000001217, 5.17100163408, 1052.51220067191],
    [0.00000001352, 0.35400553171, 209.87388421679],
    [0.00000001391, 5.36503473377, 1243.98302014049],
    [0.00000001426, 0.53946388105, 852.9525642685],
    [0.00000001501, 2.10731420473, 1691.9218520189],
    [0.00000001326, 6.28017468529, 2751.79141717511],
    [0.00000001171, 1.32902114795, 67.91186905],
    [0.00000001462, 1.51066849209, 160.852714882],
    [0.00000001164, 4.63302622392, 117.0760507367],
    [0.00000001337, 3.11900326329, 2627.3580019541],
    [0.00000001509, 4.93045095005, 1574.6019837987],
    [0.00000001213, 4.3150209554, 1354.6769763269],
    [0.00000001241, 4.40235607417, 1140.8902459219],
    [0.00000001288, 2.87027499482, 2950.8634186115],
    [0.00000001337, 3.78093252376, 2421.1724535169],
    [0.00000001327, 4.98650305262, 1567.48843679789],
    [0.00000001118, 3.03705756384, 209.12312469139],
    [0.00000001043, 3.9489850422, 156.9205616189],
    [0.00000001069, 3.08968284008, 194.89603068979],
    [0.00000001088, 2.53876092916, 1272.9248431107],
    [0.0000000127, 4.16462693224, 2516.66404576769],
    [0.00000001032, 3.44230149136, 1361.3028883607],
    [0.00000001009, 4.86702032393, 52.446380556],
    [0.000000011, 4.02565365863, 1671.06884598351],
    [0.00000001071, 2.7465486562, 1354.18934135989],
    [0.0000000112, 2.93643432204, 1037.7974717033],
    [0.00000001271, 1.45604360323, 721.40560204669],
    [0.00000001009, 2.57702574321, 1670.5812110165],
    [0.00000001145, 1.75945733161, 3157.04896704871],
    [0.00000001072, 0.274814021, 2435.3995475185],
    [0.00000001044, 5.08425663596, 1560.3748897971],
    [0.00000001195, 2.65932688138, 632.5399218297],
    [0.00000001043, 3.11389723945, 2729.96314120569],
    [0.00000000889, 0.42212522834, 359.173956793],
    [0.00000000881, 5.64403825823, 1148.49142788971],
    [0.0000000104, 3.9252402562, 1773.6739852351],
    [0.00000001118, 4.70881220655, 1890.9938534553],
    [0.00000001047, 2.54344637059, 3260.1417412673],
    [0.00000001087, 3.60856902528, 2001.2001746747],
    [0.00000001087, 3.60856902527, 2001.68780964171],
    [0.00000000974, 3.71347864898, 1987.4607156401],
    [0.00000000869, 1.74331052904, 621.98185653281],
    [0.00000001085, 2.89917981696, 2214.98690507971],
    [0.00000000841, 4.92696318078, 629.0954035336],
    [0.00000000875, 2.65002330643, 2847.77064439291],
    [0.00000001063, 4.38870058058, 2200.2721761111],
    [0.00000000853, 5.24982533241, 288.32451148881],
    [0.00000001056, 1.76497744402, 2332.3067732999],
    [0.00000000888, 5.03418369313, 1155.1173399235],
    [0.00000001045, 4.85721663734, 2.9375762542],
    [0.00000000793, 4.83325249319, 341.01470952831],
    [0.00000000817, 5.39128218727, 1802.12817323829],
    [0.0000000078, 5.10185484903, 1382.64352936309],
    [0.00000000798, 1.50816477183, 2015.42726867629],
    [0.00000000798, 4.64975742542, 2015.9149036433],
    [0.00000000834, 3.90981062264, 1802.6158082053],
    [0.00000000766, 5.01481205403, 1471.50920958009],
    [0.00000000875, 4.28307795111, 2523.7775927685],
    [0.00000000829, 2.87306260461, 1162.23088692429],
    [0.00000000749, 3.65030777836, 1809.72935520611],
    [0.00000000942, 1.83557306265, 2008.3137216755],
    [0.0000000073, 5.63130452905, 138.76131435421],
    [0.00000000734, 5.54620111084, 749.8597900499],
    [0.00000000727, 2.3868528577, 181.2995840071],
    [0.00000000727, 2.50277330889, 245.7862418359],
    [0.00000000986, 2.62709892303, 1795.0146262375],
    [0.00000000914, 3.38925031218, 266.233110961],
    [0.00000000774, 0.28234439952, 2840.1694624251],
    [0.00000000774, 3.42393705311, 2840.6570973921],
    [0.00000000806, 4.4496213801, 1912.8221294247],
    [0.00000000828, 1.60210145147, 100.1551979644],
    [0.000000007, 0.41140636858, 9779.32999085069],
    [0.000000007, 4.19439623716, 10220.6429106953],
    [0.00000000687, 4.43661173924, 102.84895673509],
    [0.00000000801, 4.16672540134, 1457.2821155785],
];

const X4: &[Term] = &[
    [0.00007957923, 0.10292939767, 220.6564599223],
    [0.00007883034, 4.66633773762, 206.42936592071],
    [0.00001517028, 0.05577219527, 227.77000692311],
    [0.00001235695, 5.39600292264, 433.9555553603],
    [0.00001152216, 5.24396587079, 213.5429129215],
    [0.00000879616, 5.34174983557, 0.2438174835],
    [0.00000709628, 4.81919971142, 199.3158189199],
    [0.00000602013, 1.23511363469, 7.3573644843],
    [0.00000507367, 4.78792568609, 426.8420083595],
    [0.00000386382, 1.30105603325, 14.47091148511],
    [0.00000338827, 4.08599989607, 419.72846135871],
    [0.00000186029, 5.42685623154, 441.06910236111],
    [0.00000220262, 4.07756916511, 640.1411037975],
    [0.0000017321, 4.46238384072, 647.25465079831],
    [0.00000084974, 6.19195566472, 234.8835539239],
    [0.0000008534, 2.82637979462, 213.0552779545],
    [0.00000044264, 1.34743358639, 117.5636857037],
    [0.00000045849, 3.59457316555, 6.86972951729],
    [0.00000047835, 3.21421968827, 853.4401992355],
    [0.00000041104, 3.75480601059, 412.6149143579],
    [0.00000030735, 1.140735083, 21.5844584859],
    [0.00000022639, 4.54040624066, 654.3681977991],
    [0.00000021067, 4.9132435926, 103.3365917021],
    [0.0000002023, 1.7435871759, 110.45013870291],
    [0.00000021389, 0.96555928483, 205.9417309537],
    [0.00000016854, 5.95101073162, 124.6772327045],
    [0.00000021739, 3.56778546142, 860.55374623631],
    [0.00000017501, 2.66582523466, 220.16882495529],
    [0.00000014506, 2.8281534347, 88.6218627335],
    [0.00000017401, 0.69153050158, 198.82818395289],
    [0.00000013517, 4.9052763068, 309.5221401393],
    [0.00000011814, 0.44837969058, 323.74923414091],
    [0.00000012071, 5.31212364211, 448.1826493619],
    [0.00000011725, 0.04357660859, 330.8627811417],
    [0.00000010174, 2.85692484188, 95.7354097343],
    [0.00000011491, 5.22879894174, 192.2022719191],
    [0.00000010611, 5.64300353639, 302.40859313851],
    [0.00000012147, 4.23365602535, 633.0275567967],
    [0.00000009067, 2.69785298236, 13.9832765181],
    [0.00000008918, 1.46910827681, 426.3543733925],
    [0.00000008311, 4.67543017537, 430.02340209721],
    [0.00000007296, 2.3493378429, 316.6356871401],
    [0.0000000789, 2.51218274353, 1066.7392946735],
    [0.00000006699, 1.49841716625, 109.9625037359],
    [0.00000006339, 5.3279030174, 216.72430665921],
    [0.00000006254, 2.70033795328, 210.36151918381],
    [0.00000006126, 1.64892191331, 301.9209581715],
    [0.00000006725, 5.51198561168, 625.9140097959],
    [0.00000006784, 5.789455518, 223.83785366],
    [0.00000006868, 2.22797475448, 203.247972183],
    [0.00000006111, 5.16124898313, 96.2230447013],
    [0.00000004468, 1.72149500008, 309.0345051723],
    [0.0000000416, 1.03429820392, 522.8212355773],
    [0.00000003681, 0.94893010872, 423.66061462181],
    [0.00000003615, 0.40952028826, 405.5013673571],
    [0.00000003079, 5.63647951312, 412.12727939089],
    [0.00000003614, 0.37301132942, 515.2200536095],
    [0.00000002896, 1.28921720639, 515.70768857651],
    [0.00000003, 4.72788705186, 422.9098550964],
    [0.00000002685, 5.00319133132, 209.6107596584],
    [0.00000002918, 0.73261775434, 89.10949770051],
    [0.00000002617, 2.98014804776, 217.4750661846],
    [0.00000002884, 0.63120048927, 191.7146369521],
    [0.00000002281, 0.6198534712, 316.14805217309],
    [0.00000002717, 5.3592719482, 131.79077970531],
    [0.00000002556, 4.65487521363, 337.9763281425],
    [0.00000001782, 6.0815792905, 241.9971009247],
    [0.00000001782, 1.94963952968, 185.08872491831],
    [0.00000001856, 1.22219785032, 618.3128278281],
    [0.00000001713, 1.39863052168, 625.42637482889],
    [0.00000001632, 5.57529252306, 728.5191490475],
    [0.0000000198, 0.12344871269, 831.6119232661],
    [0.00000001607, 4.53783680441, 611.1992808273],
    [0.00000001801, 2.7056744678, 227.2823719561],
    [0.00000001532, 0.6004971713, 1052.51220067191],
    [0.0000000151, 1.01685015001, 742.74624304909],
    [0.00000001531, 4.91027438516, 529.44714761109],
    [0.00000001394, 2.02930508328, 1361.3028883607],
    [0.00000001427, 0.73295227059, 1251.0965671413],
    [0.00000001649, 5.83036907174, 295.2950461377],
    [0.00000001249, 5.31804281913, 743.23387801611],
    [0.00000001353, 5.64535868524, 1678.1823929843],
    [0.00000001674, 0.75228934735, 231.70216018621],
    [0.00000001646, 0.97572157001, 195.38366565681],
    [0.00000001305, 1.00406093433, 934.70469748469],
    [0.0000000116, 6.07115885491, 81.50831573269],
    [0.00000001537, 0.07816179599, 21.0968235189],
    [0.00000001096, 1.15801707287, 832.0995582331],
    [0.00000001156, 0.08524385094, 508.10650660869],
    [0.00000001062, 1.72268908914, 294.80741117069],
    [0.00000001285, 5.87120310708, 1464.3956625793],
    [0.00000001079, 6.04015764687, 1368.9040703285],
    [0.00000001006, 0.12126175121, 1361.79052332771],
    [0.0000000129, 6.26123764935, 736.1203310153],
    [0.00000001051, 1.11902862643, 941.8182444855],
    [0.00000001027, 2.13247533522, 433.46792039329],
    [0.00000001021, 0.91271229263, 522.3336006103],
    [0.00000001137, 4.47891183265, 1891.4814884223],
    [0.00000000991, 5.35089033439, 1994.5742626409],
    [0.00000001038, 6.06703363765, 1148.00379292269],
    [0.00000000865, 1.97882029045, 750.3474250169],
    [0.00000000859, 1.14491409094, 416.547067621],
    [0.00000000862, 4.75102573016, 437.136949098],
    [0.00000000776, 6.05032387495, 102.84895673509],
    [0.00000000797, 0.47611886612, 1375.52998236229],
    [0.00000000824, 2.96565494557, 639.6534688305],
    [0.00000000881, 5.0281537282, 1258.6977491091],
    [0.00000000686, 0.20449337417, 234.3959189569],
    [0.00000000684, 5.09702256485, 661.4817447999],
    [0.00000000859, 5.20905469515, 537.0483295789],
];

const X5: &[Term] = &[
    [0.00000605503, 4.59646585232, 220.6564599223],
    [0.00000576439, 0.06437124594, 206.42936592071],
    [0.00000227348, 4.5908511699, 227.77000692311],
    [0.00000133503, 3.58841633128, 433.9555553603],
    [0.00000094765, 0.27215838233, 199.3158189199],
    [0.00000039851, 5.86635990391, 14.47091148511],
    [0.0000003419, 3.64452029703, 441.06910236111],
    [0.00000024941, 5.41093732098, 0.2438174835],
    [0.00000023155, 2.64207066157, 647.25465079831],
    [0.00000016208, 2.39130620524, 426.8420083595],
    [0.00000012333, 2.18222106376, 640.1411037975],
    [0.00000010358, 4.50067908167, 234.8835539239],
    [0.00000010534, 0.4142193147, 419.72846135871],
    [0.00000008668, 3.51972888423, 192.2022719191],
    [0.0000000884, 5.55216757332, 213.5429129215],
    [0.00000004707, 4.57538541908, 88.6218627335],
    [0.00000005904, 4.73107708292, 7.3573644843],
    [0.00000003895, 2.30231207024, 405.5013673571],
    [0.00000003976, 1.96984083585, 6.86972951729],
    [0.00000003675, 0.47302446664, 213.0552779545],
    [0.00000003472, 1.35605117518, 853.4401992355],
    [0.00000004393, 2.75554415948, 654.3681977991],
    [0.0000000329, 3.89078522206, 124.6772327045],
    [0.00000002569, 5.9157137544, 109.9625037359],
    [0.00000002467, 3.15983568463, 515.70768857651],
    [0.00000002708, 1.73056604662, 860.55374623631],
    [0.00000002138, 3.58678888073, 448.1826493619],
    [0.00000002447, 0.90027079514, 220.16882495529],
    [0.00000001979, 0.98519013325, 302.40859313851],
    [0.00000002238, 5.57282036056, 198.82818395289],
    [0.00000001727, 0.08010225619, 301.9209581715],
    [0.00000001398, 1.62923220404, 309.5221401393],
    [0.00000001536, 2.37774872925, 205.9417309537],
    [0.00000001195, 5.50915521926, 117.5636857037],
    [0.00000001, 4.01529701865, 223.83785366],
    [0.00000000984, 3.95579224093, 203.247972183],
    [0.00000000791, 2.18561862902, 330.8627811417],
    [0.00000000979, 5.20989352885, 95.7354097343],
    [0.00000000784, 3.19070192516, 522.8212355773],
    [0.0000000091, 2.05287501643, 96.2230447013],
];

const Y0: &[Term] = &[
    [9.52312533591, 5.58640389526, 213.5429129215],
    [0.79501390398, 3.19501080417, 0.2438174835],
    [0.26427074351, 4.83578897954, 426.8420083595],
    [0.06836881382, 2.57458281509, 206.42936592071],
    [0.06628914946, 5.46296215793, 220.6564599223],
    [0.02340967916, 0.44899651249, 7.3573644843],
    [0.01250581159, 0.60313024847, 110.45013870291],
    [0.01141539711, 1.46265679616, 419.72846135871],
    [0.01098217124, 4.08641227912, 640.1411037975],
    [0.00773784455, 5.07365052128, 213.0552779545],
    [0.00708587042, 1.13843336592, 316.6356871401],
    [0.0043422703, 5.42862996601, 529.9347825781],
    [0.0037311088, 4.71342390707, 433.9555553603],
    [0.00413446294, 0.41153807474, 102.84895673509],
    [0.00169743473, 1.48210526398, 205.9417309537],
    [0.00122184772, 2.79745491359, 103.3365917021],
    [0.00141571884, 0.13687533326, 419.2408263917],
    [0.00097840616, 5.72784467548, 323.74923414091],
    [0.00080586098, 4.05159874352, 11.2895177474],
    [0.00083840998, 5.33240905202, 227.77000692311],
    [0.0007249912, 0.84921881394, 633.0275567967],
    [0.00070188882, 5.59903361411, 209.6107596584],
    [0.00068920772, 2.44584271705, 217.4750661846],
    [0.00065633219, 1.19325366411, 202.4972126576],
    [0.00058340081, 0.59027157812, 224.5886131854],
    [0.00054036331, 3.33803216964, 853.4401992355],
    [0.00045670301, 0.30742381833, 14.47091148511],
    [0.00039957906, 2.72206781342, 199.3158189199],
    [0.00044623718, 0.90093873172, 63.49208081989],
    [0.00025182378, 5.09001467212, 216.72430665921],
    [0.00024597547, 2.95757557284, 210.36151918381],
    [0.00024755958, 4.02968885174, 415.7963080956],
    [0.00025518626, 0.0673439418, 117.5636857037],
    [0.00030420785, 6.15115633926, 735.6326960483],
    [0.00022261024, 1.10100301594, 522.3336006103],
    [0.00023384603, 3.96374854662, 647.25465079831],
    [0.0001992186, 4.09518373122, 426.3543733925],
    [0.0002336808, 4.90040735801, 149.8070146181],
    [0.00024816783, 3.92964610129, 75.0254160508],
    [0.0001505773, 3.10557746427, 277.2788112249],
    [0.00013291291, 2.3590580876, 309.0345051723],
    [0.00012028365, 5.74173457069, 1059.6257476727],
    [0.00012408238, 2.62612862596, 490.5779066629],
    [0.0001203726, 4.09279303186, 352.06040979221],
    [0.00007880259, 1.0324473213, 743.23387801611],
    [0.00007428823, 5.8350739525, 6.86972951729],
    [0.00006985779, 2.31301163514, 309.5221401393],
    [0.00009059376, 5.88705982112, 1052.02456570489],
    [0.0000662618, 0.82428012166, 838.72547026689],
    [0.00008285289, 3.6010849769, 95.7354097343],
    [0.000079086, 4.48713264921, 316.14805217309],
    [0.00006284835, 2.67337959503, 3.6883357796],
    [0.00006078527, 4.58792252731, 441.06910236111],
    [0.00005628724, 0.90747309129, 846.3266522347],
    [0.00005274108, 4.97367799615, 220.16882495529],
    [0.00005584926, 1.54150891449, 412.6149143579],
    [0.00004423799, 1.57641344464, 198.82818395289],
    [0.00004849319, 4.98130878652, 537.0483295789],
    [0.00004179381, 5.16756812825, 4.1759707466],
    [0.00005772348, 3.73707335017, 38.3768531213],
    [0.00005198014, 2.9749381059, 211.09523236671],
    [0.00005154525, 5.05852684698, 215.99059347631],
    [0.00003792407, 4.42246502754, 422.9098550964],
    [0.00004380719, 2.72775866401, 202.0095776906],
    [0.00004838174, 3.60482713264, 109.9625037359],
    [0.00003765792, 2.14993736411, 212.579705075],
    [0.00003749721, 5.88164710896, 214.506120768],
    [0.00003116757, 5.55835071261, 213.4947288117],
    [0.00003115849, 2.47295232173, 213.5910970313],
    [0.00003119049, 2.08030449144, 625.42637482889],
    [0.00003235633, 2.93645048734, 632.5399218297],
    [0.00004077069, 1.24694613809, 136.78920667889],
    [0.00003290391, 5.0395092254, 522.8212355773],
    [0.00002828736, 5.44462827617, 330.8627811417],
    [0.00003365297, 6.13313657202, 437.8877086234],
    [0.00002888976, 5.85305165742, 86.07111631471],
    [0.00002748221, 3.85851556523, 138.76131435421],
    [0.00002742545, 5.64786903747, 203.9816853659],
    [0.00002636395, 3.83621912362, 288.32451148881],
    [0.00003170535, 4.19556924462, 76.50988875911],
    [0.0000253006, 3.52650884327, 629.0954035336],
    [0.00002985976, 2.58564693197, 1066.7392946735],
    [0.00002617358, 0.73922008905, 127.22797912329],
    [0.00002504577, 6.20308081313, 9.8050450391],
    [0.00002459199, 0.55192655633, 1155.1173399235],
    [0.00002429561, 2.40176973016, 223.1041404771],
    [0.00003133467, 5.62811439341, 1368.4164353615],
    [0.00002289072, 2.1156463037, 430.7741616226],
    [0.00002651422, 0.30311808414, 412.12727939089],
    [0.00002791618, 0.1902534599, 3.42521122121],
    [0.00002086473, 1.97187121386, 423.66061462181],
    [0.00002337517, 4.29665202435, 388.70897272171],
    [0.00001735774, 4.10517039399, 736.1203310153],
    [0.0000161776, 2.87094929008, 96.2230447013],
    [0.0000163542, 2.97359194678, 12.77399045571],
    [0.00001637578, 0.62856200162, 213.0216480597],
    [0.00001633497, 1.12064121841, 214.0641777833],
    [0.00001703439, 3.99674710141, 529.44714761109],
    [0.00001499174, 5.17056778089, 52.446380556],
    [0.00001462063, 4.35331374641, 430.02340209721],
    [0.0000197585, 0.45234024897, 1.7282901918],
    [0.00001422179, 3.32899817186, 625.9140097959],
    [0.00001539334, 3.21457103113, 860.55374623631],
    [0.00001400317, 2.15177170721, 341.01470952831],
    [0.00001337694, 1.54600928268, 948.9317914863],
    [0.00001427589, 3.84316796768, 350.5759370839],
    [0.00001149795, 1.774843468, 941.8182444855],
    [0.0000111216, 5.19130278223, 234.8835539239],
    [0.00001015231, 0.28360221027, 1471.50920958009],
    [0.00001090238, 4.25624714992, 363.1061100561],
    [0.0000109146, 5.84943013311, 174.1860370063],
    [0.0000115232, 2.26380260884, 201.01273994931],
    [0.00000874317, 1.24749634822, 515.2200536095],
    [0.00001180011, 5.37502087961, 1684.80830501809],
    [0.00001058128, 2.86921511069, 742.74624304909],
    [0.00000850822, 2.98216392449, 949.4194264533],
    [0.00000869178, 1.66448567873, 210.6221516147],
    [0.00001119594, 1.89511570784, 703.8770021009],
    [0.00000868384, 0.08058763351, 216.4636742283],
    [0.00000830815, 5.29349088148, 212.79215339611],
    [0.00000825441, 2.73642207174, 214.2936724469],
    [0.00000881196, 6.18145692514, 209.35012722751],
    [0.00000866345, 1.84353188382, 217.73569861551],
    [0.00000789515, 4.95200139776, 223.83785366],
    [0.00001091862, 4.24426470278, 340.52707456129],
    [0.00001008329, 5.80156759687, 226.07308589371],
    [0.00000919088, 3.29084137367, 565.35950523021],
    [0.00000820108, 3.76565710375, 88.6218627335],
    [0.00000716162, 1.099943182, 1265.32366114289],
    [0.00000860928, 2.13534949323, 252.8997888367],
    [0.00000710939, 1.84269456164, 417.2807808039],
    [0.00000701898, 0.34872426337, 956.53297345411],
    [0.0000091863, 3.00611004376, 563.87503252191],
    [0.00000711475, 5.61815057873, 207.913838629],
    [0.00000797153, 0.44389764826, 208.1262869501],
    [0.00000758732, 0.06203142018, 728.5191490475],
    [0.00000642018, 3.49772973344, 639.6534688305],
    [0.00000769629, 1.32348354837, 218.9595388929],
    [0.00000811029, 4.65167271285, 1162.7185218913],
    [0.00000692909, 2.40594407531, 219.171987214],
    [0.00000798757, 6.0666370702, 22.3352180113],
    [0.00000834309, 1.39164707042, 160.852714882],
    [0.00000655277, 2.49159323627, 301.9209581715],
    [0.00000762632, 0.15014814295, 21.5844584859],
    [0.00000576036, 1.53086525589, 99.40443843901],
    [0.00000615654, 3.84630379584, 845.8390172677],
    [0.00000578589, 2.37484813857, 265.745475994],
    [0.00000626782, 1.22691907986, 18.40306474821],
    [0.00000589499, 2.33660635603, 554.31380496631],
    [0.00000700182, 1.97098448211, 62.0076081116],
    [0.00000697691, 5.2834444595, 124.6772327045],
    [0.00000613843, 2.85159863228, 218.2087793675],
    [0.00000581263, 0.50791540059, 231.70216018621],
    [0.00000666749, 1.25289826631, 425.35753565121],
    [0.00000516903, 5.10096101449, 414.31183538731],
    [0.00000499031, 0.96959623173, 408.68276109481],
    [0.00000502357, 1.4853135282, 1258.21011414209],
    [0.00000531983, 0.96050577649, 215.0273856298],
    [0.00000643415, 2.96350458546, 64.97655352819],
    [0.00000518385, 1.12922566079, 142.6934676173],
    [0.00000550972, 5.18286340719, 208.8770464755],
    [0.00000469313, 5.04169316833, 71.09326278771],
    [0.00000456002, 3.10039424711, 203.247972183],
    [0.00000592362, 0.29709684601, 266.233110961],
    [0.00000465459, 3.8373206941, 654.3681977991],
    [0.00000444956, 0.01953353182, 1787.9010792367],
    [0.00000502683, 2.79966508043, 251.6759485593],
    [0.00000522764, 0.62622137139, 212.05844021321],
    [0.00000422458, 0.56485405564, 479.532206399],
    [0.00000437134, 6.04075422758, 1589.3167127673],
    [0.00000414039, 2.06469019925, 148.32254190981],
    [0.00000398994, 0.07893800573, 213.6547875061],
    [0.00000398994, 1.66909550727, 213.4310383369],
    [0.00000373088, 0.74771686052, 1581.7155307995],
    [0.00000469097, 5.12816987718, 2001.2001746747],
    [0.00000361258, 3.33195222747, 302.40859313851],
    [0.0000034592, 3.442070988, 198.5650593945],
    [0.00000350777, 1.14840197831, 98.6561710411],
    [0.00000335274, 5.74248127061, 213.7553612426],
    [0.00000335274, 2.28873754957, 213.3304646004],
    [0.00000367346, 4.34008847005, 750.3474250169],
    [0.00000369973, 3.828534378, 151.2914873264],
    [0.0000039923, 2.61912746358, 1059.1381127057],
    [0.00000318144, 4.5795575394, 228.5207664485],
    [0.00000315586, 0.97485635422, 831.6119232661],
    [0.00000337834, 5.38036984568, 175.40987728371],
    [0.00000313433, 5.11627418422, 2.20386307129],
    [0.0000033004, 2.9511798213, 276.79117625789],
    [0.00000383783, 4.14240556966, 56.3785338191],
    [0.00000350135, 3.1889581549, 114.38229196601],
    [0.00000401239, 2.71851293063, 178.11819026941],
    [0.00000404631, 4.46617284845, 1479.11039154791],
    [0.00000404539, 3.09389129845, 311.9552664791],
    [0.00000304876, 4.54455856496, 195.38366565681],
    [0.00000289344, 2.91199684314, 192.2022719191],
    [0.0000027025, 3.56955603971, 636.2089505344],
    [0.00000271661, 6.00173537924, 278.76328393321],
    [0.00000283573, 4.75629059021, 191.45151239371],
    [0.00000294112, 3.54847592417, 1162.23088692429],
    [0.00000266932, 4.0841371412, 205.46615807421],
    [0.00000269475, 0.57518354804, 327.68138740401],
    [0.00000348053, 5.33129565512, 248.9676355736],
    [0.00000296599, 6.22764523323, 10.538758222],
    [0.00000252084, 0.10475870159, 213.80354535241],
    [0.00000252084, 1.64327481141, 213.28228049061],
    [0.00000250282, 4.18735452982, 433.46792039329],
    [0.00000294321, 0.44790526962, 106.5179854398],
    [0.00000270973, 6.10541688721, 1044.9110187041],
    [0.0000026382, 2.19241095861, 63.9797157869],
    [0.00000238275, 1.20077577792, 1574.6019837987],
    [0.00000305244, 5.81768185014, 483.4643596621],
    [0.00000241411, 4.17791347646, 221.61966776881],
    [0.0000031498, 5.94135752572, 479.044571432],
    [0.00000223277, 5.58851274462, 13.9832765181],
    [0.00000292846, 2.29297335501, 424.39432780471],
    [0.00000304942, 0.1828129957, 6283.3196674749],
    [0.00000237167, 3.38939567774, 235.6343134493],
    [0.00000240608, 4.17952400464, 275.7943385166],
    [0.00000263455, 0.79817206059, 70.6056278207],
    [0.00000211236, 4.7339315082, 544.1618765797],
    [0.00000205878, 2.89475990441, 842.3944989716],
    [0.00000282395, 1.99518902252, 404.7506078317],
    [0.00000203077, 6.04307654731, 2104.2929488933],
    [0.00000267955, 1.92479423159, 121.4958389668],
    [0.00000238411, 0.28536423644, 138.2736793872],
    [0.00000230884, 2.46621440966, 497.69145366371],
    [0.00000203254, 1.36588190624, 284.39235822571],
    [0.00000216423, 0.87035300847, 8.32057233081],
    [0.00000194279, 0.56631831282, 190.9638774267],
    [0.00000216822, 4.57805495139, 429.28968891431],
    [0.00000191411, 0.43155331598, 1898.10740045609],
    [0.00000212655, 5.38657458551, 651.1868040614],
    [0.00000214969, 1.4067423177, 425.878800513],
    [0.00000236822, 2.00313512044, 219.6932520758],
    [0.00000229348, 0.08407966782, 270.1652642241],
    [0.00000174163, 1.72024360668, 426.8901924693],
    [0.00000202398, 0.85428604723, 39.6006933987],
    [0.00000179962, 4.05892479085, 404.2629728647],
    [0.0000016961, 3.2096472202, 501.62360692681],
    [0.00000174157, 4.80563409005, 426.7938242497],
    [0.00000165778, 5.473375557, 312.70353387701],
    [0.00000178798, 2.73599948703, 355.99256305531],
    [0.00000180904, 2.20867391842, 618.3128278281],
    [0.00000182548, 5.9592396943, 210.8345999358],
    [0.00000179529, 2.07197132894, 216.2512259072],
    [0.00000187071, 5.22164350587, 427.805216206],
    [0.00000180856, 1.50953564487, 84.5866436064],
    [0.00000196496, 3.6959871046, 489.0934339546],
    [0.00000151676, 5.46446571963, 213.38285422711],
    [0.00000151676, 2.56675310055, 213.70297161591],
    [0.0000015143, 2.33433917622, 220.7046440321],
    [0.00000193773, 4.88770212559, 2317.5920443313],
    [0.00000166996, 1.83615762317, 1280.0383901115],
    [0.00000189342, 6.03878169201, 207.3925737672],
    [0.00000180605, 4.76194471156, 492.06237937121],
    [0.0000017272, 4.16449693176, 1052.51220067191],
    [0.00000149398, 3.04588193276, 839.2131052339],
    [0.00000146617, 5.44168689797, 220.60827581251],
    [0.00000193842, 2.62646156746, 189.1638905333],
    [0.00000178668, 1.03930372836, 344.9468627914],
    [0.00000137031, 0.70922699806, 1148.00379292269],
    [0.00000185345, 3.55326872913, 602.00806815971],
    [0.00000158449, 1.85333938109, 179.6026629777],
    [0.00000167315, 1.77379352575, 73.5409433425],
    [0.0000015589, 3.42134683788, 289.8089841971],
    [0.00000159567, 3.96486064673, 359.173956793],
    [0.00000138554, 1.62845102038, 436.4032359151],
    [0.00000164796, 2.37461935463, 1375.52998236229],
    [0.00000167034, 3.18245251049, 142.20583265029],
    [0.00000128473, 4.23682984484, 107.2687449652],
    [0.0000014227, 1.18092220136, 636.95971005981],
    [0.00000177375, 1.60572975981, 10213.5293636945],
    [0.00000125618, 1.7714322189, 644.0732570606],
    [0.00000131798, 0.93003878585, 212.27088853431],
    [0.00000130711, 0.8177113147, 214.81493730871],
    [0.00000122905, 0.15451148163, 621.98185653281],
    [0.00000165088, 5.37947744065, 237.9219353097],
    [0.00000133438, 4.08482767891, 4.9096839295],
    [0.00000120114, 0.01590735638, 194.89603068979],
    [0.00000161862, 4.2373209397, 1795.5022612045],
    [0.00000116787, 0.03950282293, 113.6315324406],
    [0.0000011821, 0.92046523686, 1890.9938534553],
    [0.00000133448, 3.13288930099, 1478.62275658089],
    [0.00000111758, 5.70722465416, 206.3811818109],
    [0.00000152292, 5.28177714601, 515.70768857651],
    [0.0000012884, 6.17183070499, 247.4831628653],
    [0.00000110215, 3.65473479864, 5.872891776],
    [0.00000107434, 1.52523203549, 216.9874312176],
    [0.00000115948, 5.37627907087, 31.9995114309],
    [0.00000109063, 3.90089614511, 114.6429243969],
    [0.00000109273, 5.46080628706, 127.71561409031],
    [0.00000107429, 0.24319756091, 767.61290040431],
    [0.0000012616, 2.80031308667, 181.2995840071],
    [0.00000110176, 5.75314210788, 10.8018827804],
    [0.00000123129, 3.51949079773, 2.9375762542],
    [0.00000134189, 1.19256728733, 35.6685401356],
    [0.00000106815, 2.59220497594, 206.47755003051],
    [0.00000105829, 6.16888137037, 220.1351950605],
    [0.00000115432, 3.2132649006, 415.3086731286],
    [0.00000118293, 5.2375748415, 245.7862418359],
    [0.00000104354, 2.46236691161, 1073.85284167431],
    [0.00000095114, 3.59922480574, 643.32249753521],
    [0.00000099528, 6.13536892918, 426.3207434977],
    [0.00000097935, 0.13297617812, 2214.4992701127],
    [0.00000106628, 2.38110021899, 39.1130584317],
    [0.00000094853, 5.78853543731, 2420.68481854989],
    [0.00000096075, 4.45602113809, 448.1826493619],
    [0.00000104203, 5.87948764743, 1361.3028883607],
    [0.00000107375, 0.82410431375, 78.9575693139],
    [0.00000093096, 3.69507490938, 209.12312469139],
    [0.00000088042, 3.0454796058, 67.424234083],
    [0.00000093076, 0.75961828465, 69.3963417583],
    [0.00000089875, 3.9241215566, 134.8291610911],
    [0.00000086729, 5.90773062067, 0.719390363],
    [0.00000088055, 4.7679762728, 87.555589023],
    [0.00000086045, 2.90879658616, 525.7419968841],
    [0.00000084186, 5.39649594615, 144.39038864671],
    [0.00000081866, 1.67950712146, 20.850745303],
    [0.00000098341, 6.24954329392, 4.4366031775],
    [0.00000112464, 3.71178482485, 98.91680347199],
    [0.00000091321, 0.3672814508, 427.3632732213],
    [0.00000088237, 1.89799508252, 209.87388421679],
    [0.00000091544, 2.02640978009, 206.9506307825],
    [0.00000079761, 3.26393184846, 159.36824217371],
    [0.0000010044, 1.97801735461, 140.2457870625],
    [0.00000078269, 1.67274038217, 14.258463164],
    [0.00000093714, 4.41010592813, 203.49405039889],
    [0.00000077457, 1.74688331628, 191.7146369521],
    [0.0000008787, 0.23216205664, 342.4991822366],
    [0.00000080557, 1.80525950382, 125.743506415],
    [0.00000082279, 5.63889998343, 91.8032564712],
    [0.00000100767, 3.7737357061, 200.52510498229],
    [0.00000102819, 1.35532997364, 617.5620683027],
    [0.00000074922, 4.60966309407, 421.212934067],
    [0.00000074704, 5.40668949066, 1582.2031657665],
    [0.00000075306, 0.45482399227, 1376.0176173293],
    [0.00000071397, 0.88773586563, 630.5798762419],
    [0.00000070299, 4.25800150348, 5.6604434549],
    [0.0000009521, 0.47362825119, 1272.9248431107],
    [0.00000069326, 3.62451064029, 214.76675319891],
    [0.00000069326, 4.40670817988, 212.3190726441],
    [0.00000076148, 1.91892162118, 934.70469748469],
    [0.0000008076, 1.04210925773, 15.2216710105],
    [0.00000085274, 3.18889922249, 53.93085326429],
    [0.00000079268, 2.69111606131, 153.73916788121],
    [0.0000008189, 0.02760055667, 353.5448825005],
    [0.00000091253, 2.2480495098, 777.17412795991],
    [0.00000070965, 5.64481654456, 1265.81129610991],
    [0.00000086364, 1.15543254121, 917.1760975389],
    [0.0000008166, 1.66400680316, 5.1728084879],
    [0.00000066327, 4.84771375413, 227.2823719561],
    [0.00000066404, 0.7792208767, 423.9212470527],
    [0.00000068065, 4.68958727466, 692.831301837],
    [0.00000081793, 4.65388189938, 2633.98391398789],
    [0.00000070972, 4.61529282078, 211.8459918921],
    [0.00000065212, 3.24754078518, 6.3941566378],
    [0.00000064142, 0.44335094646, 1464.3956625793],
    [0.00000063961, 4.99467573586, 185.2317372702],
    [0.00000065617, 5.74394773491, 542.78046973539],
    [0.00000062731, 1.78212439397, 320.5678404032],
    [0.00000073401, 6.13861817689, 286.8400387805],
    [0.00000063416, 1.27570290327, 3.1645787903],
    [0.00000061908, 2.18774926262, 329.48137429739],
    [0.00000077192, 5.9171189873, 46.71424039951],
    [0.00000070261, 4.73983524718, 337.9763281425],
    [0.00000058935, 4.66439163495, 128.7124518316],
    [0.00000059359, 6.2591916087, 50.9619078477],
    [0.00000071174, 2.5149859308, 74.53778108379],
    [0.00000059979, 0.64955132149, 2207.38572311189],
    [0.00000078873, 4.61588742653, 299.37021175271],
    [0.00000060704, 5.45064207796, 182.5234242845],
    [0.00000063502, 0.81917620362, 391.4172857074],
    [0.00000060272, 1.95975211492, 416.547067621],
    [0.00000056662, 4.74365521929, 267.71758366931],
    [0.00000066008, 2.5096606286, 778.6586006682],
    [0.00000066706, 0.9901649931, 221.17772478411],
    [0.00000066363, 4.88120491917, 696.7634551001],
    [0.00000055245, 4.21009096686, 437.136949098],
    [0.00000055098, 0.01129968609, 387.4851324443],
    [0.00000071893, 2.14697008774, 1691.9218520189],
    [0.00000059023, 3.40769286148, 215.2398339509],
    [0.00000054012, 4.6183957866, 627.61093082531],
    [0.00000053837, 2.95872345426, 241.8540885728],
    [0.00000063323, 3.50833483571, 576.4052054941],
    [0.00000067784, 4.97172129826, 116.18227885939],
    [0.00000068327, 2.75501396928, 1795.0146262375],
    [0.00000074859, 4.10679868656, 2.69149803831],
    [0.00000054888, 4.16961696361, 312.4429014461],
    [0.00000054393, 6.06284167082, 134.3415261241],
    [0.0000005625, 5.45039155171, 273.34665796181],
    [0.00000056864, 6.02030359291, 445.00125562421],
    [0.000000586, 1.06477393813, 323.2615991739],
    [0.00000050765, 0.00007477989, 224.1009782184],
    [0.00000051202, 0.35404077029, 7.30918037451],
    [0.00000052403, 5.93733244108, 518.8890823142],
    [0.00000064155, 4.15556147324, 422.1761419135],
    [0.00000050427, 4.44903394289, 214.97920152001],
    [0.00000050427, 3.58218487728, 212.10662432301],
    [0.000000629, 5.47313323353, 3.21276290011],
    [0.00000055902, 5.39313956478, 1.24065522479],
    [0.00000050047, 4.12482973047, 292.2566647519],
    [0.00000049142, 1.88444022876, 618.0497032697],
    [0.00000055589, 3.43163971575, 221.40721944771],
    [0.00000050005, 6.13525731257, 2530.8911397693],
    [0.00000059759, 5.04563353956, 439.37218133171],
    [0.00000047716, 5.10534747703, 219.9057003969],
    [0.00000063636, 3.99701508899, 2111.8941308611],
    [0.00000048821, 2.69034505764, 30.7756711535],
    [0.00000049427, 2.53636090939, 282.6954371963],
    [0.00000064684, 6.11825697845, 305.5899868762],
    [0.00000049622, 1.07398042072, 431.03479405351],
    [0.00000058187, 1.28266336916, 348.1282565291],
    [0.00000048661, 1.59473341317, 97.11681657861],
    [0.0000004871, 5.60640784947, 429.7627696663],
    [0.00000065208, 4.93613007276, 487.1213262793],
    [0.00000046209, 4.54083775787, 426.0912488341],
    [0.00000058609, 6.24950229981, 1169.83206889211],
    [0.00000055906, 1.01117086199, 418.76525351221],
    [0.00000051943, 3.56111829834, 199.528267241],
    [0.00000054149, 4.38424746311, 729.0067840145],
    [0.00000044466, 5.53386811168, 2737.0766882065],
    [0.00000055947, 0.51535684239, 638.65663108921],
    [0.0000004329, 3.23404420181, 339.53023682],
    [0.00000042587, 5.31609891905, 421.4253823881],
    [0.000000529, 4.47156939792, 205.67860639531],
    [0.00000041439, 4.04544063722, 120.1144321225],
    [0.00000047251, 6.26333565058, 558.2459582294],
    [0.00000048495, 3.54910301218, 7.4055485941],
    [0.00000047908, 2.91926139184, 192.935985102],
    [0.0000004403, 3.33712242752, 24.1352049047],
    [0.00000045108, 4.49379795044, 227.557558602],
    [0.00000046355, 1.53774240394, 432.471082652],
    [0.00000053109, 2.88300873205, 167.07249000551],
    [0.00000045868, 0.76053202388, 205.90810105891],
    [0.00000041458, 5.6827717221, 1677.6947580173],
    [0.00000037152, 2.93697363406, 207.1801254461],
    [0.00000047404, 1.81311842537, 6.8360996225],
    [0.00000038168, 2.51101235743, 244.5624015585],
    [0.00000036628, 2.09707617094, 427.5927678849],
    [0.00000045029, 0.46131983164, 428.32648106781],
    [0.00000036896, 5.20502524032, 1898.5950354231],
    [0.00000038453, 4.4245033519, 209.3983113373],
    [0.00000048446, 2.78432187312, 68.90870679129],
    [0.0000003882, 5.55847637074, 117.0760507367],
    [0.00000040434, 5.16218435235, 234.149840741],
    [0.00000036263, 3.03797170606, 273.8222308413],
    [0.00000049643, 4.62992447202, 3340.8562441833],
    [0.00000035063, 1.56413997114, 34.1840674273],
    [0.00000037471, 3.60681147286, 217.68751450571],
    [0.00000046113, 5.55096889463, 212.6491410442],
    [0.00000046113, 2.48024992554, 214.43668479881],
    [0.00000037195, 3.14310393264, 41.4006802921],
    [0.00000036077, 3.08475839413, 867.6672932371],
    [0.00000037351, 1.63731661243, 1251.0965671413],
    [0.0000003423, 0.03480230424, 182.05034353251],
    [0.00000041145, 2.55939029519, 33.6964324603],
    [0.00000040662, 4.06091902786, 59.55992755679],
    [0.00000043402, 5.46714027653, 135.3047339706],
    [0.00000039654, 5.16682565077, 113.89465699899],
    [0.00000036261, 4.05668696595, 28.0673581678],
    [0.00000032687, 4.53409645547, 956.04533848709],
    [0.00000033157, 4.00608684255, 89.10949770051],
    [0.00000036698, 2.11524640748, 431.5078748055],
    [0.00000033531, 3.91382811936, 81.50831573269],
    [0.00000031599, 4.19712154327, 553.82616999929],
    [0.00000031098, 0.18155680317, 1780.78753223589],
    [0.00000037751, 4.45825713034, 319.8170808778],
    [0.00000035774, 4.64374162623, 137.2768416459],
    [0.0000003973, 4.75427059768, 739.0410923221],
    [0.0000003835, 4.71854522019, 145.874861355],
    [0.00000034642, 0.32805201664, 77.9943614674],
    [0.0000003157, 1.72922409232, 466.1988842747],
    [0.0000003936, 0.62486177896, 374.15181032],
    [0.00000031496, 5.67282160428, 24.6228398717],
    [0.00000030207, 0.37237079306, 2523.7775927685],
    [0.00000029335, 4.61376820029, 131.79077970531],
    [0.00000040419, 5.34787848533, 1692.40948698591],
    [0.00000031724, 5.43414431783, 333.9011625275],
    [0.00000034923, 4.42267152292, 2950.3757836445],
    [0.00000028746, 0.14118338011, 406.23508054],
    [0.00000028755, 4.87076841042, 193.09604379641],
    [0.00000035049, 1.27633192968, 381.5954257209],
    [0.00000027298, 2.43907047943, 60.52313540329],
    [0.00000035019, 4.97297202382, 23.81969071961],
    [0.00000027836, 5.88920583793, 216.51185833811],
    [0.00000036108, 3.05676075892, 756.07956517339],
    [0.00000029306, 1.98340803593, 464.97504399731],
    [0.00000027049, 1.35474057566, 361.62163734781],
    [0.00000034876, 5.82579229775, 39.86132582961],
    [0.00000027398, 1.50873653792, 411.8641548325],
    [0.00000026699, 1.77744028043, 313.4542934024],
    [0.00000031423, 2.98291222547, 0.50694204189],
    [0.00000033616, 4.2074071408, 395.8225197225],
    [0.00000026335, 2.16782274779, 0.7650823453],
    [0.00000026583, 1.68554114116, 245.03548231051],
    [0.00000032446, 0.13091443612, 423.17297965479],
    [0.00000035965, 2.38625629897, 2111.40649589409],
    [0.00000027132, 2.17807289493, 60.04756252381],
    [0.00000025856, 3.24096099019, 16.9185920399],
    [0.00000029986, 1.75172035628, 710.99054910171],
    [0.00000032943, 5.30878070823, 339.042601853],
    [0.00000027965, 2.27098970437, 852.9525642685],
    [0.00000026667, 2.04771482115, 210.5739675049],
    [0.00000028346, 0.35789109097, 281.210964488],
    [0.00000025306, 3.16045047065, 233.9897820466],
    [0.00000025371, 0.1192134983, 412.827362679],
    [0.00000025734, 0.68499330423, 459.0853372739],
    [0.00000026331, 5.1665983647, 494.510059926],
    [0.00000030392, 4.52887777009, 129.6756596781],
    [0.00000025998, 1.14475064542, 681.2979666061],
    [0.00000033249, 0.3102674019, 162.3371875903],
    [0.00000034168, 5.11102486996, 260.01333583751],
    [0.00000033256, 0.02004670501, 342.0115472696],
    [0.00000026237, 2.20426681355, 45.3328335552],
    [0.00000024623, 3.52685708072, 618.8004627951],
    [0.00000033518, 3.87245484115, 26.84351789039],
    [0.0000002719, 4.56188666009, 211.8983815188],
    [0.0000002719, 3.46933216009, 215.1874443242],
    [0.00000029507, 5.96033162893, 455.1531840108],
    [0.00000032634, 1.91946398686, 2008.3137216755],
    [0.00000025187, 4.08272447614, 1272.4372081437],
    [0.00000025644, 2.29213342962, 230.2176874779],
    [0.00000024787, 5.85090359378, 2847.28300942589],
    [0.0000002367, 3.08413813287, 106.0303504728],
    [0.00000023511, 2.91304532501, 214.34606207361],
    [0.00000023511, 5.11817349516, 212.73976376941],
    [0.00000023747, 3.86428603001, 467.9988711681],
    [0.00000030107, 5.10457107202, 408.19512612779],
    [0.00000027532, 4.49562952252, 430.2865266556],
    [0.00000024105, 6.16708424151, 422.64922266551],
    [0.00000024814, 0.10470016181, 329.9690092644],
    [0.00000025569, 4.64105815749, 174.9222423167],
    [0.00000024522, 4.97031829303, 420.6916692052],
    [0.00000023164, 4.11483060864, 245.2986068689],
    [0.00000024171, 4.01730820598, 184.97110483931],
    [0.00000022048, 3.76525133977, 163.1403367424],
    [0.00000022198, 0.9180426852, 426.7301337749],
    [0.00000025834, 1.85492286402, 405.5013673571],
    [0.00000021674, 0.18639888994, 2119.00767786191],
    [0.00000023225, 6.03563186387, 207.32313779801],
    [0.00000021571, 2.12243591235, 7.87862934611],
    [0.0000002708, 4.85176617134, 1155.6049748905],
    [0.00000021569, 1.63592147192, 224.8492456163],
    [0.00000021638, 1.02889895862, 432.2586343309],
    [0.00000022198, 5.61107049084, 426.9538829441],
    [0.00000021066, 1.4146866511, 508.10650660869],
    [0.00000022956, 2.58264721236, 93.1846633155],
    [0.00000022695, 6.24214235238, 223.5772212291],
    [0.00000027166, 4.7991838212, 36.892380413],
    [0.00000025768, 1.13633294908, 143.9027536797],
    [0.00000022341, 1.99558555167, 219.76268804501],
    [0.00000020372, 2.83637498985, 849.5080459724],
    [0.00000027791, 0.28838089763, 106.7811099982],
    [0.00000020257, 0.79329378943, 131.6477673534],
    [0.00000024029, 0.97528115907, 334.7949344048],
    [0.00000020321, 5.28793099536, 3053.46855786309],
    [0.0000002176, 3.44547432746, 264.2610032857],
    [0.00000019818, 1.30149158514, 357.68948408471],
    [0.00000021046, 4.00723953716, 242.11472100371],
    [0.00000022078, 1.96836238081, 186.4555775476],
    [0.0000002133, 0.83656885419, 343.4623900831],
    [0.00000023629, 1.23658530283, 333.4135275605],
    [0.00000024992, 2.91707869462, 31.73638687251],
    [0.00000024756, 2.65874555104, 46.4536079686],
    [0.00000025007, 3.73507948705, 2428.2860005177],
    [0.00000023761, 0.76061848201, 536.5606946119],
    [0.00000021722, 1.95490574105, 202.760337216],
    [0.0000001892, 3.45843630535, 171.8984151459],
    [0.00000018653, 4.99142844854, 427.0544566806],
    [0.00000018653, 1.5376847275, 426.6295600384],
    [0.00000021149, 2.42045227957, 320.0802054362],
    [0.00000025426, 4.81957323352, 481.01667910731],
    [0.00000022841, 4.85681711059, 451.2210307477],
    [0.00000023911, 1.40533416228, 264.7486382527],
    [0.00000022993, 6.23437907106, 556.7614855211],
    [0.00000019429, 0.49892034946, 392.9017584157],
    [0.00000022024, 5.95458526387, 112.8978192577],
    [0.00000023549, 4.55443763374, 593.67068088151],
    [0.00000019967, 1.36046222351, 1567.48843679789],
    [0.00000022876, 0.86570844668, 67.91186905],
    [0.00000019677, 4.58233275783, 216.2366716922],
    [0.0000002375, 4.50456492563, 462.2667310116],
    [0.00000022555, 3.61220411831, 78.4699343469],
    [0.00000020143, 3.66113241657, 963.6465204549],
    [0.00000021017, 2.13961985045, 402.4629859713],
    [0.00000021934, 4.14044243723, 347.6406215621],
    [0.00000017902, 6.17093225727, 555.7982776746],
    [0.00000020903, 1.55046365235, 66.4610262365],
    [0.00000018918, 1.61907531561, 561.4273519671],
    [0.00000017876, 4.94950539935, 2214.98690507971],
    [0.00000017731, 4.68138674425, 460.7822583033],
    [0.00000017098, 3.04400260073, 146.8380692015],
    [0.00000024044, 2.58903556136, 141.46962733991],
    [0.00000016884, 1.64089065325, 478.0477336907],
    [0.0000001889, 3.13750980567, 572.473052231],
    [0.00000018099, 4.67997663967, 230.9514006608],
    [0.00000018165, 5.53730899074, 533.8669358412],
    [0.00000020525, 1.7327966862, 156.9205616189],
    [0.00000016659, 1.53572181695, 419.77664546851],
    [0.00000023314, 1.60748447836, 280.723329521],
    [0.00000018637, 2.70791503528, 152.77596003471],
    [0.00000016704, 2.84594084238, 422.42222012939],
    [0.00000016529, 1.17500375466, 533.37930087419],
    [0.00000016486, 5.89369907681, 835.28095197081],
    [0.00000017269, 4.52541950314, 200.2095907972],
    [0.00000020803, 1.66581919068, 175.6705097146],
    [0.00000018263, 1.72834635046, 906.130397275],
    [0.00000017267, 3.70630213204, 295.4380584896],
    [0.00000017953, 5.46559992336, 547.2002579655],
    [0.00000022334, 2.491647121, 423.87306294291],
    [0.00000020308, 2.63358277774, 294.80741117069],
    [0.00000016381, 4.28960471972, 263.9454891006],
    [0.00000016267, 0.58296245759, 1486.2239385487],
    [0.0000001854, 3.41437432865, 552.829332258],
    [0.00000016627, 6.25613561237, 1.20702533],
    [0.00000016245, 0.95492982065, 99.6675629974],
    [0.00000016399, 4.04808546179, 757.4609720177],
    [0.00000018383, 6.05008020502, 240.6302482954],
    [0.00000016013, 6.19975448744, 2097.1794018925],
    [0.00000015991, 2.20124656384, 1055.6935944096],
    [0.00000016379, 5.79238193635, 692.34366686999],
    [0.00000021494, 1.80010144776, 206.64181424181],
    [0.0000001584, 6.11030412335, 831.3487987077],
    [0.00000016271, 4.93442008056, 526.00262931501],
    [0.00000016436, 5.52440863918, 1994.08662767389],
    [0.00000018303, 0.84097877285, 100.14064374939],
    [0.00000016892, 3.75216779365, 1588.82907780029],
    [0.00000016255, 3.49297899617, 226.8762350458],
    [0.00000015567, 1.54318213545, 220.54458533771],
    [0.00000015921, 0.10158990272, 2840.1694624251],
    [0.00000016234, 2.19172369252, 490.09027169589],
    [0.00000015273, 4.9118469698, 78.2068097885],
    [0.00000015648, 0.18114715284, 215.54865049161],
    [0.00000015648, 1.56688636016, 211.53717535141],
    [0.00000018382, 0.18848218475, 220.44401160121],
    [0.00000016593, 3.42511025047, 109.48693085641],
    [0.00000018947, 1.501975022, 637.69342324271],
    [0.00000016216, 4.42535566671, 41.2976144281],
    [0.00000020572, 5.47938216081, 285.61619850311],
    [0.00000016595, 3.19938069715, 364.5905827644],
    [0.00000017326, 1.34597310936, 200.04953210281],
    [0.00000014971, 3.33832806105, 646.76701583129],
    [0.00000016383, 1.10309438059, 204.1417440603],
    [0.00000016103, 4.64455276241, 419.6802772489],
    [0.00000014886, 0.6596099533, 416.059432654],
    [0.0000001836, 1.87709798852, 211.5708052462],
    [0.00000019474, 5.02476951207, 2008.8013566425],
    [0.00000020381, 4.17760232563, 108.0024581481],
    [0.00000014597, 0.56756639384, 110.4019545931],
    [0.00000016369, 0.61877635867, 172.70156429801],
    [0.00000014609, 3.18901609785, 942.3058794525],
    [0.00000014822, 0.12437540127, 196.01680510321],
    [0.00000014578, 4.5585809095, 255.1874106971],
    [0.00000017284, 0.28522496168, 254.6997757301],
    [0.0000001579, 5.07797348512, 410.1672338031],
    [0.0000001912, 2.03406090557, 2427.7983655507],
    [0.00000017766, 0.80075789262, 50.6463936626],
    [0.00000014974, 0.23924844134, 65.46418849521],
    [0.00000019645, 4.42545578897, 14.7340360435],
    [0.00000015462, 0.64414831002, 222.9440817827],
    [0.00000015819, 1.10669581015, 82.13896305161],
    [0.00000017917, 2.79735661192, 83.1021708981],
    [0.00000014016, 5.63689121224, 427.10264079041],
    [0.00000015063, 4.17429508241, 441.8198618865],
    [0.00000017883, 2.91769140697, 458.5977023069],
    [0.00000015768, 1.3935875603, 349.0914643756],
    [0.00000019463, 1.41185123555, 72.31710306511],
    [0.00000014016, 0.89222201489, 426.58137592861],
    [0.00000013854, 2.32880269949, 13.0895046408],
    [0.00000015926, 0.40206042973, 227.03629374021],
    [0.00000015265, 1.61120369517, 272.85902299479],
    [0.00000014549, 3.76467114399, 110.49832281271],
    [0.00000015012, 6.23427543593, 220.7683345069],
    [0.00000014376, 2.59471394496, 448.9334088873],
    [0.0000001506, 5.64392577085, 980.91199584231],
    [0.00000017967, 3.03320322404, 702.3925293926],
    [0.00000013507, 3.66461671083, 295.2950461377],
    [0.00000015721, 2.79281459085, 570.98857952271],
    [0.00000013819, 4.40974508034, 457.8614969965],
    [0.00000016412, 1.18291048596, 222.14093263061],
    [0.00000016702, 5.85287056545, 100.8889111473],
    [0.00000016229, 0.83644011312, 111.4133465494],
    [0.0000001383, 3.4313521638, 434.91876320681],
    [0.00000018336, 4.67709866433, 170.2538837432],
    [0.00000014088, 0.06758308008, 540.98048284201],
    [0.00000013344, 1.61984291787, 231.06902073981],
    [0.00000013303, 3.76362078874, 472.4186593982],
    [0.00000015477, 0.3490674095, 543.2681047024],
    [0.00000012978, 5.00967301311, 241.9971009247],
    [0.00000015002, 4.20300225162, 3266.76765330109],
    [0.00000017598, 4.8041624688, 569.29165849331],
    [0.00000015115, 0.24398954365, 420.2497262205],
    [0.00000012874, 5.63936187479, 258.6319289932],
    [0.00000016607, 2.65645538069, 28.32799059869],
    [0.00000015813, 0.0892417071, 251.4153161284],
    [0.00000013957, 4.60482495392, 864.4858994994],
    [0.00000015413, 3.60816325052, 259.1195639602],
    [0.00000016676, 4.00742132263, 705.36147480921],
    [0.00000012604, 5.58744937803, 3163.6748790825],
    [0.00000012578, 0.3118677974, 238.815707187],
    [0.00000012841, 5.08974304707, 149.3193796511],
    [0.00000012315, 5.19795063531, 326.9306278786],
    [0.00000013217, 2.66592778977, 188.41313100791],
    [0.00000012147, 6.00853202742, 267.22994870229],
    [0.00000012395, 4.00929640081, 642.58878435231],
    [0.00000014104, 2.4074051488, 230.8083883089],
    [0.00000014269, 4.27275851966, 42.78208713641],
    [0.00000011476, 5.05008428113, 280.2477566415],
    [0.0000001177, 0.06778086534, 1685.2959399851],
    [0.00000011418, 2.54785709519, 97.9199657307],
    [0.00000012752, 5.31254492577, 274.30986580831],
    [0.00000013026, 5.54434755126, 193.8991929485],
    [0.00000011246, 3.76658400062, 120.01136625851],
    [0.00000011976, 2.63340598809, 380.37158544351],
    [0.00000011206, 2.55060349358, 714.92270236481],
    [0.00000014434, 2.20590299498, 387.22450001341],
    [0.0000001197, 1.79693811667, 203.5086046139],
    [0.00000014741, 1.71323516885, 2324.70559133209],
    [0.00000012049, 1.149666335, 254.38426154501],
    [0.00000010842, 0.97259949349, 640.1892879073],
    [0.0000001335, 0.65575474438, 639.177895951],
    [0.00000014697, 1.26523656461, 432.9923475138],
    [0.00000010885, 0.32557672954, 17.28229033479],
    [0.0000001125, 4.26467347482, 105.76971804189],
    [0.0000001374, 2.81161922279, 815.3071635977],
    [0.00000010769, 3.01740495484, 19.36627259471],
    [0.0000001285, 5.62701027438, 196.2774375341],
    [0.00000010505, 0.20513166775, 206.54124050531],
    [0.00000010385, 4.75266812707, 197.08058668621],
    [0.00000010842, 4.05799649461, 640.0929196877],
    [0.0000001029, 0.21483888335, 202.2365802267],
    [0.00000013234, 4.7735865943, 894.5970620441],
    [0.00000010647, 2.8179775393, 819.8154634768],
    [0.00000010182, 5.04028210552, 3369.8604275197],
    [0.0000001021, 1.14110944477, 107.52937739611],
    [0.00000011258, 5.75203953422, 189.96703968541],
    [0.00000011951, 6.11153957549, 732.1881777522],
    [0.00000013918, 5.98432962919, 486.64575339981],
    [0.00000010041, 5.47708883979, 606.5163680388],
    [0.00000014076, 3.35843996869, 256.8319420998],
    [0.00000012084, 4.63467214008, 1471.9968445471],
    [0.00000010842, 1.0795940355, 1883.8803064545],
    [0.00000011375, 1.98886226218, 106.2573530089],
    [0.00000012596, 3.05673567432, 403.26613512341],
    [0.00000011028, 4.81005385977, 468.4865061351],
    [0.0000000986, 1.78727904818, 33.3809182752],
    [0.00000012108, 2.52678208199, 355.50492808829],
    [0.00000010908, 4.5039481666, 186.71620997851],
    [0.00000009594, 1.63465903483, 434.0037394701],
    [0.00000010453, 3.45682160657, 1905.2209474569],
    [0.00000009546, 1.56659382657, 189.47940471839],
    [0.00000011233, 4.51872140986, 641.104311644],
    [0.00000009914, 1.12182170266, 47.9380806769],
    [0.00000009448, 2.22449169971, 407.1982883865],
    [0.00000009546, 0.75076951952, 219.3844355351],
    [0.00000010366, 2.64558555015, 196.8681383651],
    [0.0000000937, 3.27855073906, 230.0052391568],
    [0.00000011272, 2.99571473964, 731.70054278519],
    [0.00000009924, 3.34063551482, 275.3067035496],
    [0.00000009472, 1.45022970781, 194.42045781031],
    [0.00000012896, 0.49167321133, 662.28738607949],
    [0.0000000915, 1.2026738422, 526.2657538734],
    [0.00000011879, 0.70048342795, 477.5600987237],
    [0.00000010766, 3.45948811786, 240.36961586451],
    [0.00000009308, 0.32925975206, 1368.9040703285],
    [0.00000009735, 4.729725775, 433.90737125051],
    [0.00000010066, 5.20819082705, 424.1336953738],
    [0.00000010907, 3.94508545487, 351.5727748252],
    [0.00000012189, 1.67640720798, 480.52904414029],
    [0.00000011289, 3.24731450821, 390.19344543],
    [0.00000011032, 5.1645816365, 395.34943897051],
    [0.00000008918, 6.04573965183, 19.8875374565],
    [0.00000009676, 5.36593074203, 238.6726948351],
    [0.00000010312, 4.29506314601, 17.0216579039],
    [0.00000008636, 5.96071961936, 92.2908914382],
    [0.00000008732, 4.67038464325, 157.8837694654],
    [0.00000009566, 1.08602404748, 1493.3374855495],
    [0.00000010066, 1.32092240008, 429.5503213452],
    [0.00000009374, 1.79762056777, 206.3174913361],
    [0.00000009533, 2.2910695289, 237.11878615761],
    [0.0000000978, 0.41361009361, 850.25880549781],
    [0.00000008433, 1.81570030403, 427.00206705391],
    [0.00000008433, 4.7134129231, 426.68194966511],
    [0.0000001024, 1.66027874947, 2744.1902352073],
    [0.00000008356, 1.17965180591, 824.4983762653],
    [0.00000009888, 4.34303137793, 9.3174100721],
    [0.00000008509, 6.12186657443, 3156.5613320817],
    [0.00000008903, 0.86621704764, 649.7023313531],
    [0.00000008389, 0.3007657345, 232.66536803271],
    [0.00000008197, 2.91430634921, 90.0032695778],
    [0.00000008246, 0.71371200046, 194.6329061314],
    [0.00000008317, 3.708309239, 661.4817447999],
    [0.00000008295, 4.66370849222, 2531.3787747363],
    [0.00000011264, 0.19657279056, 269.6776292571],
    [0.00000011219, 5.6078233043, 453.9293437334],
    [0.0000000897, 5.6587681746, 187.67941782501],
    [0.00000008956, 5.8940653762, 749.8597900499],
    [0.00000010013, 3.51802249315, 2744.6778701743],
    [0.00000010091, 4.3780452269, 495.9945326343],
    [0.00000008906, 4.1700643349, 518.40144734719],
    [0.00000007978, 1.68218286192, 394.5986794451],
    [0.00000007792, 5.966132303, 2413.5712715491],
    [0.00000008025, 1.1597559438, 830.8611637407],
    [0.00000010403, 0.38130462371, 354.76872277791],
    [0.00000008025, 1.24802278239, 857.3723524986],
    [0.00000010165, 4.79885957746, 192.448350135],
    [0.00000009333, 2.94875622705, 471.9310244312],
    [0.00000009111, 4.34972226694, 167.9662618828],
    [0.00000009887, 2.79593153869, 29.44876501211],
    [0.00000007646, 4.18255519394, 487.60896124631],
    [0.00000009194, 0.22887207656, 594.8945211589],
    [0.00000007695, 1.00995675874, 207.7013903079],
    [0.00000007915, 3.72645918918, 131.16013238639],
    [0.00000007999, 4.19812767433, 256.08118257441],
    [0.00000009422, 4.87000438446, 172.48911597691],
    [0.00000008126, 5.12558873909, 402.77850015639],
    [0.00000010105, 0.37101174537, 204.9448932124],
    [0.00000007633, 5.98476290128, 511.2879003464],
    [0.00000009479, 3.80790804578, 350.08830211689],
    [0.00000008422, 2.65463118043, 503.1080796351],
    [0.00000007684, 5.08713167056, 305.10235190919],
    [0.00000009659, 5.37522379945, 380.6322178744],
    [0.00000007375, 6.00876960253, 367.03826331921],
    [0.00000009835, 4.7705668035, 2325.1932262991],
    [0.00000007261, 6.07068227227, 69.6087900794],
    [0.00000007327, 1.03432156084, 232.4529197116],
    [0.00000008716, 1.46511731987, 405.0137323901],
    [0.00000009076, 5.54405684361, 237.4343003427],
    [0.00000009427, 4.50525102171, 418.2439886504],
    [0.00000007385, 5.28613440029, 141.208994909],
    [0.00000007235, 6.06771220435, 2001.68780964171],
    [0.00000007849, 5.1103977272, 176.894349992],
    [0.00000007786, 3.04563909213, 100.1551979644],
    [0.00000007111, 0.78899804979, 72.577735496],
    [0.00000009164, 0.91705396219, 562.3905598136],
    [0.00000007298, 0.17912713996, 425.56998397231],
    [0.00000007773, 0.05373244763, 144.1779403256],
    [0.00000007342, 2.72544980965, 326.1969146957],
    [0.00000007093, 0.79204881061, 291.5059052265],
    [0.00000006873, 5.44329864315, 2310.4784973305],
    [0.0000000866, 5.24323492513, 343.9836549449],
    [0.00000009119, 4.57102761808, 113.15845168861],
    [0.00000007614, 2.36906012007, 239.40640801801],
    [0.00000007081, 4.84402626338, 448.98829064149],
    [0.00000007895, 0.32210557679, 1169.34443392509],
    [0.00000007696, 4.16685790987, 746.67839631219],
    [0.00000007903, 2.33550155951, 84.6897094704],
    [0.00000007977, 4.51267535337, 171.0046432686],
    [0.00000007298, 0.06680077999, 428.11403274671],
    [0.00000008742, 6.06241714509, 739.5648493114],
    [0.0000000759, 0.83668168509, 1802.6158082053],
    [0.00000008186, 6.25213891994, 28.6980054867],
    [0.00000007872, 1.27624139711, 135.5799206165],
    [0.00000006935, 1.68866808772, 1287.15193711231],
    [0.00000006519, 2.71209280189, 314.1880065853],
    [0.00000006628, 3.37815400506, 269.2020563776],
    [0.00000008878, 1.45180473574, 190.6483632416],
    [0.00000008467, 5.88497294703, 486.1581184328],
    [0.00000006757, 6.09171118268, 419.20719649691],
    [0.00000006377, 5.93532586744, 526.7533888404],
    [0.00000007376, 5.26260347482, 25.3590451821],
    [0.00000006333, 3.05880237158, 117.6667515677],
    [0.00000006682, 2.34072274026, 110.9714035647],
    [0.00000006651, 3.60111217827, 385.7882114149],
    [0.00000007569, 3.57942402238, 196.1344251822],
    [0.0000000736, 0.56305984682, 128.6093859676],
    [0.00000006901, 2.93953956658, 250.191475851],
    [0.00000007381, 0.99738654496, 376.4394321804],
    [0.00000007504, 5.30246960621, 397.63706083091],
    [0.00000007473, 5.57604903253, 24.88596443009],
    [0.00000006275, 5.77608642511, 329.1658601123],
    [0.0000000757, 1.45795353512, 990.47322339791],
    [0.00000006057, 2.85826159973, 856.62159297321],
    [0.00000006364, 3.24758615307, 2221.6128171135],
    [0.00000005928, 4.7597076916, 505.5557601899],
    [0.00000007836, 3.88573570654, 129.2000867986],
    [0.00000006147, 5.38817990453, 639.6198389357],
    [0.00000006324, 4.16792532854, 756.56720014041],
    [0.00000005898, 4.12207507137, 73.0533083755],
    [0.00000006943, 0.75389771722, 141.7302597708],
    [0.00000005913, 4.48939242917, 121.2352065359],
    [0.00000005823, 0.04791756675, 843.8789716799],
    [0.00000006807, 3.82323029526, 384.3037387066],
    [0.00000006016, 5.31195959222, 3480.06674873909],
    [0.00000006641, 3.45892667351, 95.6323438703],
    [0.00000006458, 3.97624356687, 3583.1595229577],
    [0.00000007069, 4.22691071621, 910.0625505381],
    [0.00000007779, 4.74986011895, 724.5869957844],
    [0.00000007221, 2.56386729615, 312.9666584354],
    [0.0000000761, 1.44986844464, 25.516611749],
    [0.00000007748, 1.92450987967, 55.4153259726],
    [0.00000007664, 0.29268789796, 236.4374626014],
    [0.00000005819, 3.22733168242, 210.88278404561],
    [0.00000005819, 4.80388713776, 216.2030417974],
    [0.00000006261, 1.83319897051, 109.92887384111],
    [0.00000006136, 1.06488319276, 297.9888049084],
    [0.00000005471, 6.10353405237, 672.3844327119],
    [0.00000005971, 0.80843068991, 2200.2721761111],
    [0.00000006662, 2.34354527541, 611.1992808273],
    [0.00000006604, 1.99020920437, 393.2172726008],
    [0.00000005774, 5.34907528886, 97.17169833279],
    [0.00000005678, 4.04634265509, 17.5092928709],
    [0.00000005771, 4.76574743994, 164.78486814511],
    [0.00000006577, 1.54896971348, 2641.0974609887],
    [0.00000005341, 0.19806045792, 104.82106441041],
    [0.00000006085, 5.30179771397, 433.4342904985],
    [0.00000006219, 0.78907212361, 100.4012761803],
    [0.00000005285, 6.01982733401, 37.88921815429],
    [0.00000005304, 1.0825275569, 397.14942586389],
    [0.00000006082, 5.90524903819, 640.66236865931],
    [0.00000006287, 2.2362865777, 636.47207509279],
    [0.00000005677, 1.52340696709, 208.4351034908],
    [0.00000005677, 0.22462654591, 218.6507223522],
    [0.00000005284, 3.86736907469, 760.4993534035],
    [0.00000007032, 1.41471093834, 244.0747665915],
    [0.00000005102, 0.78146044482, 319.5564484469],
    [0.00000006572, 0.46210662825, 1130.47519297691],
    [0.00000005363, 4.68863519797, 700.90805668431],
    [0.00000005071, 4.80768023276, 806.96977631951],
    [0.00000006462, 4.11391793715, 370.2196570569],
    [0.00000005365, 3.88729493516, 170.51700830159],
    [0.00000006508, 5.51528842107, 566.8439779385],
    [0.00000005532, 1.94235906842, 115.8667646743],
    [0.00000005557, 4.49290822007, 1788.38871420371],
    [0.000000049, 3.62174655888, 5.385256809],
    [0.00000004866, 1.55046015501, 533.1161763158],
    [0.00000004838, 4.76613158881, 2.7251279331],
    [0.00000004827, 4.78712076128, 3686.2522971763],
    [0.00000005563, 5.4777871825, 508.5941415757],
    [0.00000005497, 4.10404574865, 551.27542358051],
    [0.00000006373, 1.0241177241, 310.4707937708],
    [0.00000004825, 1.77695267272, 184.3379653929],
    [0.00000004857, 3.11269069727, 124.2590337067],
    [0.00000005731, 2.20047665983, 525.2543619171],
    [0.00000005593, 6.01527558647, 320.8284728341],
    [0.00000005962, 3.48939528514, 411.3765198655],
    [0.0000000489, 2.56527545644, 383.81610373959],
    [0.00000004978, 3.21018438051, 178.33063859051],
    [0.00000006082, 5.25823168414, 54.89406111079],
    [0.00000005118, 3.4333215655, 89.0400617313],
    [0.00000005637, 5.42363670995, 500.1391342185],
    [0.00000005571, 1.33403064909, 3060.5821048639],
    [0.00000006493, 2.81526207686, 26088.1469590577],
    [0.00000005591, 0.97716211165, 285.35556607221],
    [0.000000048, 5.14117990977, 1383.13116433011],
    [0.00000005463, 6.24603882858, 57.86300652739],
    [0.00000005035, 5.27515551134, 658.30035106221],
    [0.00000004758, 6.23235562812, 632.06434895021],
    [0.00000005081, 0.71196597981, 482.9767246951],
    [0.00000004612, 3.90241552282, 634.512029505],
    [0.00000006057, 4.20888329498, 1045.3986536711],
    [0.00000004578, 2.92031249606, 271.6497369324],
    [0.00000005515, 4.29921246987, 455.41381644171],
    [0.00000005305, 1.73055781517, 484.9488323704],
    [0.0000000544, 5.20717674102, 770.0605809591],
    [0.00000004994, 1.27545128731, 42.88515300039],
    [0.00000004487, 0.44426255576, 732.45130231059],
    [0.00000005536, 0.07875805067, 304.84171947829],
    [0.00000004486, 3.98303359589, 440.1753304838],
    [0.00000004513, 0.92434082044, 745.03386490949],
    [0.00000005772, 0.96059759251, 32.48714639791],
    [0.00000004455, 0.91803135084, 849.7711705308],
    [0.00000005554, 3.37288410174, 493.5468520795],
    [0.00000005487, 2.96316195594, 319.06881347989],
    [0.0000000477, 1.62322164671, 991.9576961062],
    [0.00000004782, 2.31677814858, 504.8050006645],
    [0.00000005299, 2.61568871196, 200.80029162821],
    [0.00000004812, 3.04862288999, 327.9420198349],
    [0.00000004838, 0.11237010673, 774.7264474051],
    [0.00000004398, 0.00709452583, 637.2203424907],
    [0.00000004622, 2.94649200387, 43.0452116948],
    [0.00000004573, 4.4220645294, 26.58288545949],
    [0.00000005909, 1.99258143739, 313.43973918739],
    [0.00000004454, 6.20355719133, 198.72511808891],
    [0.00000004339, 5.29255890619, 153.25153291419],
    [0.00000005432, 5.00322114273, 199.040632274],
    [0.00000004814, 4.75808669593, 179.9181771628],
    [0.00000005416, 4.00641531684, 952.3401877601],
    [0.00000004417, 1.27050755952, 113.37090000971],
    [0.00000005809, 3.24853511558, 254.5967098661],
    [0.00000004499, 4.50151529131, 958.33296034749],
    [0.00000004316, 4.07998083372, 840.91002626331],
    [0.00000004591, 5.41584864129, 771.5450536674],
    [0.00000004277, 4.17205571182, 208.3894115085],
    [0.00000004839, 3.27594102018, 635.4752373515],
    [0.00000004685, 0.59356881548, 111.67397898031],
    [0.00000005613, 1.4000789587, 597.11519917759],
    [0.00000004574, 2.16667886254, 201.7634994747],
    [0.00000004511, 3.47781815287, 1044.6478941457],
    [0.00000005229, 4.59429315323, 108.96566599461],
    [0.00000004479, 3.85453916879, 183.85033042589],
    [0.00000004309, 5.85647983089, 3472.9532017383],
    [0.00000004502, 3.27038194685, 262.3009576979],
    [0.00000004161, 5.13548179257, 337.08255626521],
    [0.00000004124, 4.06317112443, 440.5814673941],
    [0.00000004511, 4.75862432396, 207.426203662],
    [0.00000004109, 0.91307204622, 1140.8902459219],
    [0.00000005256, 5.0738335613, 832.0995582331],
    [0.00000004845, 2.27696783071, 226.28553421481],
    [0.00000005044, 0.2158016051, 1033.1145589148],
    [0.00000004049, 2.54843540923, 372.66733761171],
    [0.00000004077, 3.46715688832, 650.436044536],
    [0.00000004372, 2.72227659738, 225.3223263683],
    [0.00000004235, 2.81122205692, 348.8790160545],
    [0.00000004119, 5.80261426663, 2318.0796792983],
    [0.00000005657, 5.89121825218, 198.0774244275],
    [0.00000004022, 3.84203441493, 623.4663292411],
    [0.00000004173, 1.46039755717, 215.8305347819],
    [0.00000004173, 0.28763595583, 211.2552910611],
    [0.00000004084, 4.37381652925, 2847.77064439291],
    [0.00000003996, 3.91636260921, 561.6904765255],
    [0.0000000406, 1.82766165317, 228.36070775411],
    [0.00000004344, 4.99072999724, 278.2756489662],
    [0.0000000401, 2.77317134028, 283.9047232587],
    [0.00000003948, 5.71910364337, 2729.96314120569],
    [0.00000005205, 3.11137685284, 72.05647063421],
    [0.00000004634, 2.61060858315, 527.22646959241],
    [0.00000005029, 4.811575968, 197.5012778115],
    [0.00000004736, 3.73180881545, 425.1450873301],
    [0.00000003969, 5.38207110627, 21.0968235189],
    [0.00000005443, 0.63349242611, 481.97988695381],
    [0.00000005129, 4.15635980903, 219.2201713238],
    [0.00000005129, 3.87485901115, 207.8656545192],
    [0.00000003855, 3.65565538336, 425.6181680821],
    [0.00000004014, 3.86098154856, 707.809155364],
    [0.0000000386, 3.28600233258, 512.66930719071],
    [0.00000003855, 2.87345784377, 428.0658486369],
    [0.00000003832, 6.08314691428, 668.4522794488],
    [0.00000003833, 1.39881214946, 969.86629557841],
    [0.00000003992, 4.82103462797, 248.75518725251],
    [0.00000004504, 3.32625747172, 3061.06973983091],
    [0.00000003821, 5.77104029935, 1258.6977491091],
    [0.00000003915, 2.80717156028, 969.37866061139],
    [0.00000004, 1.32325223162, 49.47743513939],
    [0.00000004401, 2.76622768705, 774.98957196349],
    [0.00000003903, 0.6428352239, 379.1477451661],
    [0.00000005273, 5.43800011102, 88.35873817511],
    [0.00000004974, 6.14192419266, 604.7163811454],
    [0.0000000377, 4.80245950772, 212.17031479781],
    [0.0000000377, 3.22875931246, 214.91551104521],
    [0.00000004435, 2.07247731785, 204.97852310719],
    [0.00000003735, 2.76356339426, 1596.43025976811],
    [0.0000000369, 2.41699531433, 738.814089786],
    [0.00000003728, 5.0614414213, 407.71955324831],
    [0.00000004348, 1.86173045083, 69.12115511239],
    [0.00000004549, 6.13388081033, 491.8017469403],
    [0.0000000371, 5.49660849476, 1575.08961876571],
    [0.00000003788, 2.56556261266, 258.78949556011],
    [0.00000004244, 4.08555395724, 319.0833676949],
    [0.00000003638, 4.65492407042, 634.7244778261],
    [0.00000004782, 3.44556090693, 313.9273741544],
    [0.00000004614, 3.41327739029, 318.12015984841],
    [0.00000003611, 1.12376486937, 316.6838712499],
    [0.00000003647, 1.83675765478, 48.51422729289],
    [0.00000003812, 3.74026028851, 6276.2061204741],
    [0.00000004045, 1.63984852083, 519.15220687259],
    [0.00000003837, 4.78177293888, 28.5549931348],
    [0.00000003969, 3.99934092978, 398.5308327082],
    [0.00000004988, 2.96911465595, 105.2966372899],
    [0.00000004187, 1.30561704256, 1905.70858242391],
    [0.00000003673, 5.96397301101, 619.534175978],
    [0.00000003529, 4.10821310653, 215.50295850929],
    [0.00000004522, 3.21771300936, 229.5845480315],
    [0.00000003575, 3.63589972521, 291.76902978489],
    [0.00000004154, 1.16714789173, 721.40560204669],
    [0.00000004496, 5.28534594309, 120.74507944141],
    [0.00000003649, 1.96746705061, 444.36811617781],
    [0.00000004846, 0.23438304594, 25.61967761299],
    [0.00000004339, 3.4836103326, 609.1216151605],
    [0.00000003687, 2.97857012599, 2538.00468677009],
    [0.00000003925, 4.68848167473, 317.59889498661],
    [0.00000004658, 4.49051482749, 2641.5850959557],
    [0.00000004614, 2.41025191456, 616.07759559439],
    [0.00000003906, 3.62084996234, 525.514994348],
    [0.00000003627, 5.17097264158, 10206.4158166937],
    [0.00000003452, 2.95884375111, 62.4952430786],
    [0.00000003889, 3.82999893371, 103.81216458159],
    [0.00000004257, 2.80377624434, 72.090100529],
    [0.00000004693, 3.34813046925, 619.046541011],
    [0.00000003405, 6.22409873424, 393.70490756781],
    [0.00000003406, 0.38852296833, 102.8971408449],
    [0.00000003405, 3.77912190314, 172.0014810099],
    [0.00000004, 2.69996342698, 1048.0924124418],
    [0.00000004448, 6.15238947202, 1485.7363035817],
    [0.00000004227, 4.47863866494, 413.8242004203],
    [0.00000003578, 4.21100881764, 316.58750303031],
    [0.00000003352, 1.98897148023, 298.4764398754],
    [0.00000003398, 3.47406128287, 102.8007726253],
    [0.00000003878, 2.82672809448, 210.60759739969],
    [0.00000003282, 1.97609142655, 215.07977525651],
    [0.00000003282, 6.05512739363, 212.0060505865],
    [0.00000003262, 3.29324404703, 327.9969015891],
    [0.00000003353, 1.38999835719, 766.128427696],
    [0.00000003738, 3.80751619036, 123.2958258602],
    [0.00000003649, 4.73181541366, 610.44852130189],
    [0.00000004126, 1.21427959149, 187.5193591306],
    [0.00000003391, 0.57199147232, 541.2959970271],
    [0.00000003608, 1.001992168, 1119.429492713],
    [0.00000003758, 0.1014100649, 101.88574888859],
    [0.00000003231, 1.54367112759, 188.270118656],
    [0.00000003787, 4.28600120342, 652.67127676971],
    [0.00000003965, 0.26781383536, 914.20715212231],
    [0.00000003735, 5.95952945648, 80.44204202221],
    [0.00000003177, 5.74147536696, 691.3468291287],
    [0.00000003187, 3.55567838325, 305.8506193071],
    [0.00000004058, 2.17039511461, 92.0638889021],
    [0.00000003123, 4.1940360987, 307.07445958451],
    [0.00000003691, 5.19957321657, 194.5323323949],
    [0.00000003467, 2.75272147826, 428.5389293889],
    [0.0000000327, 2.49533429526, 282.9078855174],
    [0.00000004132, 0.151967781, 434.47682022211],
    [0.00000003256, 2.06059207193, 344.45922782439],
    [0.00000004289, 0.56065735151, 187.9400502559],
    [0.00000003819, 6.09508602758, 114.6978061511],
    [0.00000003049, 0.94913326717, 842.65762352999],
    [0.0000000336, 0.53915356673, 2516.66404576769],
    [0.00000003446, 2.93783559783, 305.85311143459],
    [0.00000003964, 6.14378220347, 101.62511645769],
    [0.00000003527, 3.59077404312, 496.2069809554],
    [0.00000003065, 4.95454737668, 348.3913810875],
    [0.000000035, 2.81354951024, 789.7043009321],
    [0.00000002995, 4.38744698123, 91.54262404029],
    [0.00000003701, 1.02316235609, 405.747445573],
    [0.00000003539, 5.71127020478, 233.1866328945],
    [0.00000002935, 4.18624941833, 92.55401599659],
    [0.00000003414, 4.5848105846, 331.45348197271],
    [0.00000003976, 0.6086400757, 31.2633061205],
    [0.000000031, 3.82122143105, 130.1969245399],
    [0.00000003608, 0.90039093237, 315.6724792936],
    [0.00000002909, 0.13390320628, 109.69937917751],
    [0.0000000289, 3.94290490601, 111.2008982283],
    [0.00000002917, 1.86330744308, 357.4770357636],
    [0.00000003278, 0.09902260816, 126.231141382],
    [0.00000002952, 3.59175692736, 93.28772917949],
    [0.00000002859, 5.00627346803, 181.56270856549],
    [0.00000003008, 2.5311755453, 434.70631488571],
    [0.00000002925, 5.09670716093, 3796.4586183957],
    [0.00000003751, 1.42372094959, 624.6756153035],
    [0.00000003658, 1.22634527273, 268.68079151581],
    [0.00000003572, 6.08351547848, 851.9557265272],
    [0.00000002923, 0.90054830851, 252.4121538697],
    [0.00000003162, 0.65619571338, 77.7191748215],
    [0.00000003903, 5.95524321349, 1066.2516597065],
    [0.00000003528, 3.73411976495, 834.7933170038],
    [0.00000003311, 1.68379432029, 212.092070108],
    [0.00000003007, 4.10088774274, 699.94484883781],
    [0.00000002914, 0.86930882153, 625.1632502705],
    [0.00000002826, 1.18680021962, 71.8440223131],
    [0.00000002804, 2.83113208076, 425.40571976101],
    [0.00000002779, 3.18761506074, 629.846163059],
    [0.00000003204, 1.68163453202, 31.24875190549],
    [0.00000003277, 2.83164568099, 232.5534934481],
    [0.00000003564, 5.2636028041, 38.11622069041],
    [0.00000003345, 3.12621780784, 77.4730966056],
    [0.00000003005, 3.42504542953, 135.0922856495],
    [0.00000003542, 0.53352784827, 239.5664667124],
    [0.00000002893, 3.87647442239, 3899.5513926143],
    [0.00000003544, 1.94605675805, 282.20780222929],
    [0.00000002804, 3.69798114637, 428.27829695801],
    [0.0000000285, 0.70634186901, 177.6305553024],
    [0.00000002737, 5.93123636788, 626.126458117],
    [0.00000002722, 5.30959446782, 214.018485801],
    [0.00000002716, 1.52354592802, 620.4973838245],
    [0.00000002818, 0.89510519023, 354.508090347],
    [0.00000003749, 3.91662579273, 145.6624130339],
    [0.00000003118, 1.00275828453, 3376.9739745205],
    [0.00000002902, 3.76865453023, 52.934015523],
    [0.00000003, 4.86727145892, 206.9049388002],
    [0.00000002965, 0.01297764373, 42.5696388153],
    [0.00000002885, 3.24271543105, 418.97770183331],
    [0.00000002693, 4.35806644152, 433.2047958349],
    [0.00000003088, 1.37972033305, 2957.48933064529],
    [0.00000002922, 3.8167084131, 1063.0702659688],
    [0.00000003407, 4.57769873569, 499.175926372],
    [0.0000000327, 1.13498595983, 924.28964453971],
    [0.00000003462, 4.87665869514, 182.78405671541],
    [0.00000003056, 3.84258924311, 179.8151112988],
    [0.00000002751, 1.98489147077, 322.26476143261],
    [0.00000003461, 3.77635871944, 60.3106870822],
    [0.00000003254, 3.71673729334, 87.87110320809],
    [0.0000000332, 0.62445995726, 122.9803116751],
    [0.00000003628, 1.19683291978, 239.1457755871],
    [0.00000002722, 0.33833300117, 644.33388949151],
    [0.00000002866, 1.16131783177, 315.41184686271],
    [0.00000003289, 1.94135959143, 685.7177548362],
    [0.00000002598, 5.28324130559, 151.5039356475],
    [0.00000002931, 0.28498618097, 7.83293736379],
    [0.00000002624, 0.03837656753, 311.2190611687],
    [0.00000002667, 2.34899532832, 1080.9663886751],
    [0.00000002603, 3.14892076264, 508.7371539276],
    [0.00000002559, 3.79368088293, 639.3903442721],
    [0.00000002562, 5.83357031849, 827.67977000299],
    [0.00000002581, 1.05939902375, 159.2081834793],
    [0.00000002754, 4.40535716712, 287.83687652179],
    [0.00000002531, 0.15195670029, 1048.8431719672],
    [0.00000002912, 5.40624189026, 1382.64352936309],
    [0.00000002686, 4.87164344891, 643.0618651043],
    [0.00000002508, 0.40758211682, 297.8857390444],
    [0.00000002488, 1.63124486596, 95.47228517591],
    [0.00000003158, 2.22361915053, 671.8967977449],
    [0.00000002864, 5.93155931661, 453.66871130251],
    [0.00000002518, 5.50666990719, 2626.8703669871],
    [0.00000002793, 4.5181780424, 208.8624922605],
    [0.0000000266, 1.58245860025, 443.5167829159],
    [0.00000002576, 1.71533674425, 952.8639447494],
    [0.00000002986, 6.26559400172, 105.7842722569],
    [0.00000003018, 3.58337419807, 141.9427080919],
    [0.00000002912, 2.65612793047, 167.3331224364],
    [0.0000000243, 2.83520399981, 235.68919520349],
    [0.00000003277, 5.74822288161, 1055.95671896799],
    [0.00000002469, 2.00868439815, 213.1034620643],
    [0.0000000243, 0.45033884806, 112.4101842907],
    [0.00000002646, 4.93243120045, 312.21589891],
    [0.00000002465, 4.44624138102, 205.8935468439],
    [0.00000002655, 3.73582825216, 440.85665404],
    [0.0000000237, 3.86926101157, 64.7159210973],
    [0.00000002389, 5.95405430378, 85.58348134769],
    [0.00000002369, 5.61575950108, 220.8689082434],
    [0.00000002369, 5.55705197269, 206.2169175996],
    [0.00000002493, 3.84873402269, 388.2213377547],
    [0.00000002974, 3.71475509576, 531.73476947149],
    [0.00000002491, 1.54562260546, 123.78346082721],
    [0.00000002347, 5.51371577599, 3046.3550108623],
    [0.00000003237, 2.58143954637, 338.72708766791],
    [0.0000000252, 4.60115704499, 338.0457641117],
    [0.00000002377, 3.29530891079, 628.6077685666],
    [0.00000002701, 3.7393913027, 300.854684461],
    [0.00000002653, 5.33077957429, 56.8661687861],
    [0.00000002732, 3.27550474377, 244.30176912761],
    [0.00000002275, 4.5894560377, 4002.64416683289],
    [0.00000002952, 0.74298822983, 645.77017809],
    [0.00000002509, 2.94920927023, 125.42799222991],
    [0.00000002253, 0.65609530771, 310.41591201661],
    [0.00000002632, 0.50847991258, 416.79314583689],
    [0.00000002307, 4.08063632531, 3164.1625140495],
    [0.00000002532, 0.42305602058, 90.3187837629],
    [0.00000002434, 1.36706416328, 769.0973731126],
    [0.00000002819, 5.90718650467, 34.9202727377],
    [0.00000002827, 4.24209921133, 782.59075393131],
    [0.00000002409, 1.51772791041, 621.4942215658],
    [0.00000002533, 3.47780451554, 631.54308408841],
    [0.00000002542, 0.51811754999, 176.63371756111],
    [0.00000002171, 5.33772457878, 1891.4814884223],
    [0.00000002552, 0.14027811136, 12566.3955174663],
    [0.00000002811, 6.10219051624, 641.62557650581],
    [0.0000000291, 0.06456678007, 330.9658470057],
    [0.00000002345, 4.28867359206, 2104.7805838603],
    [0.00000002188, 0.65867073144, 1457.2821155785],
    [0.00000002591, 5.35033895729, 170.41394243761],
    [0.00000002615, 2.11809115675, 143.6903053586],
    [0.00000002434, 5.26567142518, 183.486632131],
    [0.00000003003, 4.77242756352, 739.30172475301],
    [0.00000002177, 4.17646966614, 67.6366824041],
    [0.00000002774, 5.95434553236, 1048.58004740881],
    [0.00000002462, 4.18866808016, 247.2707145442],
    [0.00000002386, 2.80178234746, 430.98660994371],
    [0.00000002988, 5.80843823954, 1802.12817323829],
    [0.0000000281, 1.01437231483, 140.721359942],
    [0.00000002255, 4.97404441838, 6681.46867088311],
    [0.00000002483, 1.02757238229, 375.9517972134],
    [0.00000002123, 5.05514768498, 610.93615626891],
    [0.00000002154, 5.72841221574, 444.1074837469],
    [0.00000002497, 1.66085968924, 17.91542978119],
    [0.00000002073, 0.36915137771, 218.4719039259],
    [0.00000002063, 3.20592565915, 616.56523056141],
    [0.0000000225, 3.80713836644, 366.2875037938],
    [0.0000000275, 2.87538792242, 485.63685357099],
    [0.00000002252, 4.35642815581, 49.26498681829],
    [0.00000002813, 2.30944774975, 837.4534458797],
    [0.00000002062, 5.38385531966, 2634.47154895491],
    [0.00000002822, 4.66089423732, 162.6527017754],
    [0.00000002611, 2.12105258497, 927.5911504839],
    [0.00000002212, 0.93221653291, 193.4115579815],
    [0.00000002182, 3.48927417704, 335.38563523581],
    [0.00000002403, 0.69912075444, 452.4448710251],
    [0.00000002564, 1.72919712902, 427.73578023681],
    [0.00000002111, 3.6734032722, 422.6974067753],
    [0.00000002308, 1.5289070986, 155.2236405895],
    [0.00000002054, 2.67747070868, 883.5513617802],
    [0.00000002713, 1.75846895594, 6.3484646555],
    [0.00000002692, 4.40535350977, 1040.97886544099],
    [0.00000002007, 1.89413239528, 529.1840230527],
    [0.00000002282, 3.2554646479, 173.9254045754],
    [0.00000002783, 5.5478837215, 165.3610147611],
    [0.00000002346, 4.39880402871, 447.448936179],
    [0.00000002376, 5.81992609349, 945.48727319021],
    [0.00000002081, 3.67268655906, 90.57941619379],
    [0.00000002489, 1.26376364157, 2487.1722274643],
    [0.00000002124, 4.95438142065, 133.34468838281],
    [0.00000002, 3.28717598901, 419.1926422819],
    [0.00000001998, 6.09695396696, 518.62844988331],
    [0.00000001969, 5.59121857952, 530.68554210351],
    [0.00000002467, 5.87379769512, 429.81095377611],
    [0.00000001955, 1.07634475226, 105.03351273151],
    [0.00000002054, 5.64490223202, 3789.34507139489],
    [0.00000002425, 2.71454644074, 180.40581212981],
    [0.00000001995, 4.07142764766, 409.5765329721],
    [0.00000002035, 5.88558560015, 437.40007365639],
    [0.0000000199, 2.77224098857, 2854.3965564267],
    [0.00000002449, 5.08664901886, 213.00709384469],
    [0.00000002354, 4.13524877414, 657.4065791849],
    [0.00000002466, 2.78275943769, 421.6885069465],
    [0.00000001932, 2.38157117348, 1062.80714141041],
    [0.00000002448, 1.35236650723, 205.98991506349],
    [0.00000001912, 0.15654616325, 419.28901050149],
    [0.00000002647, 4.44444666019, 747.1660312792],
    [0.00000001873, 3.8263115165, 345.08987514331],
    [0.00000002199, 2.46538504354, 681.7856015731],
    [0.00000002386, 5.73059167495, 25234.46294233869],
    [0.00000001886, 0.03617873737, 1096.8504572182],
    [0.000000022, 2.10319305969, 784.28767496071],
    [0.00000001859, 2.84714041687, 535.6669227346],
    [0.00000002123, 6.16596992817, 418.2776185452],
    [0.00000002326, 1.19326583155, 166.58485503849],
    [0.00000002007, 4.67834010536, 527.01402127131],
    [0.00000002162, 3.59622095072, 420.2040342382],
    [0.00000002185, 2.29643101683, 110.189506272],
    [0.00000002564, 4.79991609811, 425.9482364822],
    [0.00000001976, 4.85054795864, 102.3276918733],
    [0.00000001951, 2.23867265514, 168.2963302829],
    [0.00000001965, 4.29608988597, 39.9162075838],
    [0.00000001953, 2.7769109308, 116.07921299541],
    [0.00000002118, 4.88232966976, 409.4335206202],
    [0.00000002542, 4.99290516515, 355.02935520881],
    [0.00000002294, 3.74777420008, 181.08713568601],
    [0.00000002378, 2.54240991813, 385.3005764479],
    [0.00000001807, 2.73751159349, 275.5818901955],
    [0.00000001833, 0.68863493736, 267.8776423637],
    [0.00000002302, 4.17275768872, 43.5328466618],
    [0.00000002098, 4.80007899391, 253.16042126761],
    [0.00000002063, 4.42291105999, 177.36743074401],
    [0.00000002261, 6.12160762328, 635.94831810351],
    [0.00000002208, 4.77564977638, 1194.21109128031],
    [0.00000002053, 5.2973765112, 103.37022159689],
    [0.00000001966, 1.31777921278, 835.5440765292],
    [0.00000002346, 1.80109706525, 222.6165055101],
    [0.00000001855, 2.03672663902, 23.1383671634],
    [0.00000001855, 5.17831929261, 22.6507321964],
    [0.00000002017, 2.76554751934, 243.599193712],
    [0.00000002346, 4.19045412826, 2957.9769656123],
    [0.00000001781, 6.26122223924, 220.9170923532],
    [0.00000001781, 4.91158923453, 206.1687334898],
    [0.00000001851, 4.47233105553, 1107.8961574821],
    [0.00000001906, 1.87733371845, 586.06949891369],
    [0.00000002083, 1.33621197933, 1037.7974717033],
    [0.00000002271, 4.50659373635, 234.0379661564],
    [0.00000002271, 3.52462508383, 193.0478596866],
    [0.00000002373, 4.14396002026, 281.4234128091],
    [0.00000001873, 6.16192556463, 1084.0047700609],
    [0.00000002113, 3.38006360857, 671.1605924345],
    [0.00000001854, 0.68921688536, 614.38067456499],
    [0.00000001766, 2.44535049525, 2.6769438233],
    [0.00000001774, 1.55215476226, 220.39582749141],
    [0.00000001774, 3.33747140433, 206.6899983516],
    [0.00000002018, 1.23143201334, 250.45210828191],
    [0.00000001877, 2.438265112, 35.18090516859],
    [0.00000002293, 4.61602871136, 912.722679414],
    [0.00000001775, 4.07092209849, 228.7332147696],
    [0.00000001775, 0.8187040681, 198.3526110734],
    [0.00000001908, 3.18462167186, 3377.4616094875],
    [0.00000001924, 4.76564757091, 534.1275682721],
    [0.0000000174, 5.30818813577, 3362.74688051889],
    [0.00000002154, 5.11342973502, 666.96780674051],
    [0.00000002288, 5.13225437866, 103.597224133],
    [0.00000001725, 0.79235621805, 132.85705341579],
    [0.00000001785, 3.40968747924, 346.43133549971],
    [0.00000002259, 4.18060259139, 700.4204217173],
    [0.00000001692, 0.30340863528, 212.5340130927],
    [0.00000001721, 3.64237121578, 306.34074640161],
    [0.00000002004, 2.69534154569, 256.6718834054],
    [0.00000002083, 3.81593475661, 5216.33655531789],
    [0.00000002234, 0.83744491072, 799.36859435169],
    [0.0000000198, 0.98922312465, 451.97179027311],
    [0.00000002071, 5.15399823914, 549.8940167362],
    [0.00000002071, 0.48659989203, 45.49040012211],
    [0.00000001998, 1.93857319277, 1171.63205578549],
    [0.00000002007, 2.45452004266, 1364.4842820984],
    [0.00000001836, 1.35614614488, 644.8069702435],
    [0.00000001687, 3.75927628859, 520.37355502251],
    [0.00000001705, 0.74206548564, 2222.1004520805],
    [0.0000000208, 6.16948523942, 587.450905758],
    [0.00000002061, 0.38736887363, 337.5581291447],
    [0.00000001674, 4.31595591695, 207.6386519831],
    [0.00000001723, 6.04023119944, 6290.4332144757],
    [0.0000000176, 3.82579789121, 12.28635548869],
    [0.00000001697, 5.77995233151, 552.34169729099],
    [0.00000001676, 0.47032854735, 41.08516610701],
    [0.00000001715, 3.70385355966, 133.86844537209],
    [0.00000001707, 0.48133607676, 98.6012892869],
    [0.00000001846, 1.81726608439, 5849.1202946311],
    [0.00000001707, 5.82292680345, 895.0846970111],
    [0.00000001821, 3.25202211117, 9779.32999085069],
    [0.00000002189, 4.93942538444, 66.9486612035],
    [0.00000002014, 0.51363431995, 546.71262299849],
    [0.00000001781, 3.25286200486, 9772.21644384989],
    [0.00000001685, 1.201300279, 10220.6429106953],
    [0.00000001942, 5.33748414084, 246.68001371321],
    [0.00000002001, 4.36639869407, 3.94896821049],
    [0.00000001626, 0.43544986691, 624.1543504417],
    [0.00000001942, 5.24671264008, 9146.54625153749],
    [0.00000001802, 1.15593638614, 1389.3509394536],
    [0.00000001613, 5.41878737515, 1144.0716396596],
    [0.0000000216, 1.3085086056, 336.5949212982],
    [0.0000000209, 2.34311286379, 629.35852809199],
    [0.00000001968, 1.56341565357, 118.3144452291],
    [0.00000001822, 3.6266310679, 1009.22317149361],
    [0.00000001611, 2.37000428005, 347.16754081009],
    [0.00000001728, 2.57879496141, 1091.3814416201],
    [0.00000002055, 5.50239856358, 1372.3485886246],
    [0.00000001569, 2.96591528468, 122.71967924421],
    [0.00000001542, 0.61717380145, 1166.1630401874],
    [0.00000001878, 0.56043256933, 133.82026126229],
    [0.00000001628, 5.37550822094, 46.22660543249],
    [0.00000001987, 1.16248631448, 913.5070688342],
    [0.00000001542, 4.91932828975, 551.3448595497],
    [0.00000001643, 5.71885241225, 196.3805033981],
    [0.00000001715, 3.48043677711, 709.29362807231],
    [0.00000001803, 5.13352083431, 58.0754548485],
    [0.0000000162, 2.19306684644, 700.2079733962],
    [0.00000001584, 3.7133854849, 3767.4544350593],
    [0.00000002027, 5.4888696502, 2118.5200428949],
    [0.0000000166, 0.17086781255, 318.43567403349],
    [0.00000001695, 5.56469519031, 327.19375243699],
    [0.00000001617, 0.82126521853, 83.6234357599],
    [0.00000001522, 3.95536376972, 406.39513923441],
    [0.00000001847, 3.63437800519, 488.6057989876],
    [0.00000001505, 2.43278632462, 447.28887748461],
    [0.00000001747, 1.601820248, 173.6984020393],
    [0.00000001511, 1.19445092182, 414.09938706621],
    [0.00000001932, 2.99396965089, 40.59753113999],
    [0.00000001512, 5.6286411326, 1748.2810787631],
    [0.00000001775, 3.81584430362, 2707.58486990309],
    [0.0000000183, 5.34714618651, 259.7527034066],
    [0.00000001574, 5.50722602817, 322.3678272966],
    [0.00000001477, 0.48223767966, 355.2418035299],
    [0.00000001498, 0.41524391899, 174.9367965317],
    [0.00000001487, 5.62073453387, 141.4550731249],
    [0.00000001676, 0.72544410812, 3693.36584417709],
    [0.00000001461, 2.9560453256, 105.13657859549],
    [0.00000001692, 1.89129839404, 679.4979797127],
    [0.00000001835, 4.28334745785, 245.99869015701],
    [0.00000001449, 0.7109001673, 1159.0494931866],
    [0.00000001661, 3.29324922569, 736.59590389479],
    [0.00000001443, 4.93214393414, 466.5143984598],
    [0.00000001476, 3.81891695589, 3480.5543837061],
    [0.00000001645, 3.60830794016, 249.71839509901],
    [0.00000001496, 4.79833807829, 77623.56832092509],
    [0.0000000189, 2.07787059832, 764.6439549877],
    [0.0000000148, 4.72024280261, 262.77653057739],
    [0.00000001937, 5.04418585979, 757.5640378817],
    [0.00000001587, 1.89128298241, 6.9179136271],
    [0.00000001683, 2.4447037654, 6503.7323099137],
    [0.0000000177, 3.51344178417, 482.5011518156],
    [0.00000001735, 0.71720239752, 2435.3995475185],
    [0.00000001457, 4.59007449571, 256.18424843839],
    [0.00000001471, 5.41881489262, 1453.08683775701],
    [0.00000001613, 0.21330361543, 271.8621852535],
    [0.00000001848, 0.98286127487, 419.94090967981],
    [0.00000001954, 0.12353263696, 145.387226388],
    [0.00000001662, 2.01416074486, 25454.87558477749],
    [0.0000000142, 1.40716618831, 1354.18934135989],
    [0.0000000139, 4.83119263295, 544.7525774107],
    [0.00000001679, 4.40359026093, 285.1431177511],
    [0.00000001607, 2.30923658857, 544.2649424437],
    [0.00000001536, 1.18240794718, 3273.8812003019],
    [0.00000001536, 4.32400060077, 3274.36883526891],
    [0.00000001587, 3.92843113844, 148.5831743407],
    [0.00000001794, 4.23240329975, 754.5950924651],
    [0.00000001407, 5.56458421467, 316.1144222783],
    [0.00000001658, 0.90957945549, 415.0625949127],
    [0.00000001512, 2.71827936357, 428.4865397622],
    [0.00000001501, 1.47511443142, 5746.0275204125],
    [0.00000001696, 4.47164509007, 59.038662695],
    [0.0000000159, 4.94949423692, 349.6127292374],
    [0.00000001827, 2.18886350049, 230.3207533419],
    [0.00000001891, 3.43722012359, 1165.6392831981],
    [0.00000001759, 3.01502964755, 200.27902676641],
    [0.00000001759, 1.87459651904, 226.80679907661],
    [0.00000001677, 5.80656752223, 50.15875869559],
    [0.00000001384, 2.70658249939, 1176.9456158929],
    [0.000000016, 3.86790494115, 10433.9420061333],
    [0.00000001491, 2.88391814725, 9676.23721663209],
    [0.000000014, 4.97246366718, 1950.5344739372],
    [0.00000001334, 5.43876271483, 301.65783361311],
    [0.00000001377, 5.57667415659, 243.29037717131],
    [0.00000001377, 2.45454466359, 183.79544867171],
    [0.00000001454, 4.85439502931, 330.3751461747],
    [0.00000001421, 2.95881908071, 469.9709788434],
    [0.00000001426, 1.44277711657, 934.4415729263],
    [0.00000001356, 1.16210512595, 210.1345166477],
    [0.00000001314, 4.28508634948, 415.04804069769],
    [0.00000001338, 5.08811236319, 118.6299594142],
    [0.00000001453, 2.14612729124, 679.8134938978],
    [0.0000000147, 2.2401909158, 321.3015535861],
    [0.00000001314, 3.658636048, 878.08234618209],
    [0.00000001715, 4.51219845192, 79.43065006591],
    [0.00000001305, 4.30852333812, 238.18505986809],
    [0.00000001382, 5.23650480607, 718.8548556279],
    [0.00000001464, 3.49743224988, 397.9001853893],
    [0.00000001758, 1.96057349073, 452.70550345601],
    [0.00000001356, 6.13336562879, 280.9357778421],
    [0.0000000179, 4.19013422025, 1357.3707350976],
    [0.00000001578, 3.80812940834, 383.5529791812],
    [0.00000001464, 2.84230067135, 360.1371646395],
    [0.00000001375, 5.32376328559, 535.56385687061],
    [0.0000000162, 2.04485074017, 109.0687318586],
    [0.00000001663, 0.24074353253, 102.73708215049],
    [0.00000001314, 1.59459147404, 1670.5812110165],
    [0.00000001452, 5.66629342942, 316.896319571],
    [0.00000001302, 2.52670094701, 116.6699138264],
    [0.00000001421, 4.09380191404, 166.84548746939],
    [0.00000001339, 4.29105717413, 5863.3473886327],
    [0.00000001685, 1.36491781577, 214.53975066279],
    [0.00000001458, 4.62040676992, 9352.73179997469],
    [0.00000001341, 5.18571387486, 1183.16539101641],
    [0.000000013, 2.31662723526, 120.6020670895],
    [0.00000001281, 3.00808942775, 1108.3837924491],
    [0.00000001652, 4.06437698345, 165.8486497281],
    [0.00000001259, 5.12727736043, 2950.8634186115],
    [0.00000001508, 3.22670487711, 763.1931121742],
    [0.00000001251, 2.13418978784, 1055.2059594426],
    [0.00000001416, 5.4508028301, 1063.55790093581],
    [0.00000001273, 5.31702713057, 2207.8733580789],
    [0.00000001755, 1.82782460074, 557.75832326239],
    [0.00000001665, 5.34226901164, 163.82166029861],
    [0.0000000133, 1.04705345661, 156.02678974161],
    [0.00000001472, 5.21259622405, 346.1561488538],
    [0.00000001472, 2.07100357046, 346.64378382081],
    [0.00000001283, 3.66165325532, 4215.94326227089],
    [0.00000001564, 6.16380597537, 3391.68870348911],
    [0.00000001232, 3.58365746191, 767.1252654373],
    [0.00000001339, 5.12238861307, 419.7620912535],
    [0.00000001471, 0.61024942528, 2693.3577759015],
    [0.00000001265, 4.91032534273, 212.3045184291],
    [0.00000001355, 4.63185174755, 418.71956152989],
    [0.00000001236, 3.21756257132, 409.6795988361],
    [0.00000001263, 0.18630409787, 2090.06585489169],
    [0.0000000158, 3.30454335371, 1477.8383671607],
    [0.0000000131, 0.47622589149, 1012.66768978969],
    [0.00000001245, 0.37055529521, 748.9660181726],
    [0.00000001565, 2.33371277407, 1268.9926898476],
    [0.00000001267, 3.75495075578, 115.11600514891],
    [0.00000001279, 5.83252185405, 217.9481469366],
    [0.00000001279, 5.34028961972, 209.13767890641],
    [0.00000001237, 4.82630923494, 4112.8504880523],
    [0.00000001208, 6.03951463451, 116.12739710521],
    [0.00000001358, 2.43392352337, 973.7984488415],
    [0.00000001406, 3.94371718897, 959.45373476091],
    [0.00000001365, 2.10668027413, 988.28866740149],
    [0.00000001189, 3.35382822803, 1378.3052391897],
    [0.000000012, 5.20941165157, 614.868309532],
    [0.00000001537, 5.11588456984, 170.72945662269],
    [0.00000001449, 1.51194108336, 1020.2688717575],
    [0.00000001181, 2.90097686991, 372.77040347569],
    [0.00000001227, 4.12497084479, 2421.1724535169],
    [0.00000001504, 4.14296643297, 2810.6776441217],
    [0.00000001191, 6.20818805618, 487.3965129252],
    [0.00000001601, 3.29434090785, 1151.1851866604],
    [0.00000001207, 2.53978476142, 3170.78842608329],
    [0.00000001288, 6.26513392858, 3149.44778508089],
    [0.00000001277, 1.84735278399, 217.24806364849],
    [0.00000001276, 4.18638529447, 94.7722018878],
    [0.00000001451, 5.76650446504, 514.95692905111],
    [0.00000001451, 2.62491181145, 514.46929408409],
    [0.00000001235, 5.003768345, 173.43776960839],
    [0.00000001353, 2.18947506754, 530.0466571627],
    [0.00000001464, 4.73495977065, 746.15463932291],
    [0.00000001246, 0.898400633, 424.8699006842],
    [0.00000001236, 0.93764208982, 1248.3857620281],
    [0.00000001279, 1.60294934322, 703.38936713389],
    [0.00000001236, 5.87825960887, 538.8483164723],
    [0.00000001234, 5.73806183883, 416.3200650849],
    [0.00000001161, 0.25671181566, 313.7149258333],
    [0.00000001414, 0.03305318629, 2648.6986429565],
    [0.00000001177, 6.19222057815, 643.5856220936],
    [0.00000001187, 5.75067279775, 1394.9800137461],
    [0.00000001173, 0.03353446861, 331.6135406671],
    [0.00000001176, 1.33278978806, 252.1490293113],
    [0.00000001245, 3.08429983167, 293.74113746021],
    [0.00000001187, 5.29261047609, 4105.7369410515],
    [0.00000001274, 2.13113537295, 165.10038233019],
    [0.00000001391, 1.59389148646, 5860.16599489499],
    [0.00000001365, 3.65657609285, 674.0813537413],
    [0.00000001165, 2.73482385874, 107.0417424291],
    [0.00000001169, 6.25851690874, 104.29979954861],
    [0.0000000128, 1.03182051788, 60.79832204921],
    [0.0000000147, 5.17513400102, 1147.7406683643],
    [0.00000001243, 1.73840614377, 945.7503977486],
    [0.00000001211, 0.72754477376, 271.05903610141],
    [0.00000001378, 2.91003182751, 880.26690217851],
    [0.00000001141, 6.22742124714, 1365.23504162379],
    [0.00000001452, 5.39698934001, 670.2522663422],
    [0.00000001372, 4.69362648452, 5852.3016883688],
    [0.00000001152, 1.00740618265, 253.2153030218],
    [0.00000001145, 3.63821232586, 3796.94625336271],
    [0.00000001147, 3.66166961803, 2048.1582325577],
    [0.00000001139, 2.20526813654, 227.81819103291],
    [0.00000001139, 2.68435803005, 199.26763481011],
    [0.0000000135, 5.09740387152, 25440.64849077589],
    [0.00000001152, 3.5424239578, 475.6000531359],
    [0.00000001377, 2.07148345291, 660.851097481],
    [0.00000001324, 4.93758146323, 101.3644840268],
    [0.00000001189, 1.08318258977, 1383.9343134822],
    [0.00000001403, 5.24418904071, 1699.0353990197],
    [0.00000001177, 0.25741420805, 303.3023650158],
    [0.00000001164, 0.45690069556, 1773.6739852351],
    [0.00000001179, 0.96345477476, 272.33775813299],
    [0.00000001228, 4.57813937399, 91.70019060721],
    [0.00000001431, 1.96162121028, 1467.3139317586],
    [0.00000001142, 4.99209015555, 656.9189442179],
    [0.00000001157, 4.74432612488, 469.6434025708],
    [0.00000001157, 4.74432612488, 470.1310375378],
    [0.00000001459, 4.0203922191, 1128.7782719475],
    [0.00000001199, 1.7573587035, 384.5161870277],
    [0.0000000136, 1.52010327589, 1560.3748897971],
    [0.00000001399, 1.83388449686, 1243.98302014049],
    [0.00000001154, 5.47298196371, 5539.8419719753],
    [0.0000000129, 4.31671851937, 1403.5780334552],
    [0.00000001426, 2.28376835451, 701.6924461045],
    [0.00000001402, 3.92764404612, 1112.3159457122],
    [0.00000001097, 5.97076399005, 735.6808801581],
    [0.00000001431, 2.57854764872, 388.9696051526],
    [0.00000001187, 5.80714139797, 6599.7115371315],
    [0.00000001093, 1.56243726726, 427.317581239],
    [0.00000001537, 0.69918341067, 2854.8841913937],
    [0.00000001417, 2.31755447139, 25557.96835899609],
    [0.00000001238, 2.88079905059, 559.94287925881],
    [0.00000001473, 0.24029882674, 2751.79141717511],
    [0.00000001452, 3.65793468409, 228.0331314815],
    [0.00000001516, 1.17544869102, 560.46663624809],
    [0.00000001103, 3.0598126882, 531.9405201482],
    [0.00000001301, 3.01734562484, 9790.37569111459],
    [0.00000001099, 4.42566235624, 527.929045008],
    [0.00000001256, 0.41159011755, 877.8192216237],
    [0.0000000125, 2.28718973712, 1226.45442019471],
    [0.00000001113, 4.71819779483, 124.18959773749],
    [0.00000001072, 2.44959483556, 206.2693072263],
    [0.00000001072, 2.44003133103, 220.8165186167],
    [0.00000001335, 1.74949827208, 121.0082039998],
    [0.00000001282, 6.11708013789, 9782.51138458839],
    [0.00000001072, 5.3377439501, 220.4964012279],
    [0.00000001072, 5.83506752367, 206.5894246151],
    [0.00000001303, 2.12423614143, 1096.48675892331],
    [0.00000001397, 3.88396933288, 1461.6848574661],
    [0.00000001085, 4.2975627402, 379.8839504765],
    [0.0000000117, 0.55123201282, 705.1008423783],
    [0.00000001054, 5.52683609857, 155.53915477459],
    [0.00000001405, 6.19309224384, 5436.7491977567],
    [0.00000001097, 3.03189055427, 476.56326098241],
    [0.00000001241, 0.40056980352, 2833.0559154243],
    [0.00000001288, 5.1361290656, 1340.8053429983],
    [0.00000001129, 1.50688193833, 1222.52226693161],
    [0.0000000129, 5.50615903453, 1082.2596649217],
    [0.00000001166, 3.4884560549, 2467.6428764329],
    [0.00000001299, 0.72075981403, 2509.5504987669],
    [0.00000001321, 1.39448839419, 9366.9588939763],
    [0.00000001051, 5.92119994324, 959.97749175019],
    [0.00000001051, 2.77960728965, 960.4651267172],
    [0.00000001211, 1.23911890811, 304.1055141679],
    [0.00000001052, 2.29712493185, 645.5577297689],
    [0.00000001127, 5.02482962262, 78477.2523376441],
    [0.00000001258, 5.97921156731, 5867.27954189579],
    [0.00000001073, 1.31054744928, 328.4845365561],
    [0.0000000129, 6.05901218139, 71.5688356672],
    [0.00000001053, 6.20330756381, 795.43644108859],
    [0.00000001329, 3.46712878887, 2740.7457169112],
    [0.00000001352, 5.91851196501, 1127.50624756031],
    [0.00000001032, 4.22822194022, 774.25336665311],
    [0.00000001421, 4.76004456961, 398.38782035631],
    [0.00000001302, 2.04302425721, 476.07562601539],
    [0.00000001018, 6.23816461448, 135.7923689376],
    [0.0000000124, 5.00950394649, 761.98382611181],
    [0.00000001072, 2.83229864917, 1257.9469895837],
    [0.00000001044, 5.1162505168, 304.36614659881],
    [0.00000001166, 4.90192971442, 613.6299150396],
    [0.00000001025, 1.58832762314, 121.59890483079],
    [0.00000001321, 2.86590848137, 323.48860171],
    [0.00000001279, 2.94437273951, 203.72105293501],
    [0.00000001279, 1.94525342708, 223.36477290801],
    [0.00000001145, 1.46132806151, 519.88592005549],
    [0.00000001018, 1.34516588766, 640.8918633229],
    [0.00000001389, 0.53131371898, 1115.7604640083],
    [0.00000001343, 5.45761793906, 108.26558270649],
    [0.00000001195, 5.57047410357, 99.1438060081],
    [0.00000001008, 5.87818461327, 102.5883243042],
    [0.00000001143, 0.50705630471, 256.3443071328],
    [0.00000001019, 0.20479434596, 6247.26929803929],
    [0.0000000125, 4.11174294828, 759.0148806952],
    [0.00000001, 0.56919545753, 1939.4887736733],
    [0.0000000111, 0.09487667592, 1397.9489591627],
    [0.0000000117, 2.83129485516, 7.3909943791],
    [0.00000001196, 0.06592121358, 46.8173062635],
    [0.00000001151, 4.08931701317, 76.0222537921],
    [0.00000001005, 1.04985332435, 690.8591941617],
    [0.00000001316, 2.89375228785, 475.11241816889],
    [0.00000000995, 5.77459088813, 99.92819542829],
    [0.00000001197, 5.97834335795, 1392.5323331913],
    [0.0000000111, 4.55961650413, 523.2968084568],
    [0.00000001088, 3.40095791153, 824.23525170691],
    [0.00000001015, 3.0430840504, 634.98760238449],
    [0.00000001012, 0.20207071166, 689.86235642041],
    [0.00000001381, 4.8752186624, 97.4323307637],
    [0.00000001276, 6.06052974092, 465.7112493077],
    [0.00000001233, 0.63981764737, 1546.2908081474],
    [0.0000000116, 4.66657413935, 152.9884083558],
    [0.00000001247, 5.15702411658, 2434.9119125515],
    [0.00000001201, 1.52749255612, 528.71094230071],
    [0.00000001045, 3.06096994103, 608.0008407471],
    [0.00000001034, 4.03244571439, 540.49284787499],
    [0.00000000988, 4.0341036923, 967.8941879031],
    [0.00000000973, 2.36193993021, 173.38288785421],
    [0.00000001081, 3.91239703303, 560.9397170001],
    [0.00000001105, 5.31122507957, 227.7218228133],
    [0.00000001105, 5.8615863942, 199.3640030297],
    [0.00000001022, 2.567353032, 599.40282103799],
    [0.00000001176, 1.11948010869, 9797.4892381154],
    [0.00000001174, 2.18660086424, 1680.87615175499],
    [0.0000000098, 4.64038062361, 944.99963822319],
    [0.00000001194, 3.00496182534, 725.0746307514],
    [0.00000001045, 4.7432634342, 343.49601997789],
    [0.00000001227, 2.37463413166, 1973.37663399041],
    [0.00000001185, 0.73899940221, 773.24197469681],
    [0.00000001222, 1.64001146959, 776.2109201134],
    [0.0000000098, 3.66760351816, 524.78128116509],
    [0.00000001285, 4.08409167589, 6.82154540749],
    [0.00000001225, 4.39413389062, 25344.66926355809],
    [0.00000000985, 1.95660242133, 913.24394427581],
    [0.00000000995, 5.50466248309, 557.2827503829],
    [0.00000000983, 5.82567686855, 550.3816517032],
    [0.00000001005, 0.48068217539, 301.17019864609],
    [0.00000001208, 6.18461471853, 2597.3785486837],
    [0.0000000095, 1.34316892428, 568.5408989679],
    [0.0000000122, 3.06190616867, 1458.71591204951],
    [0.00000001171, 0.82243324505, 2538.4923217371],
    [0.00000001155, 0.22992677973, 308.7713806139],
    [0.00000000978, 6.24942495607, 394.7017453091],
    [0.00000000967, 1.76680956806, 1332.9917127094],
    [0.00000001232, 4.85507772888, 10.051123255],
    [0.00000000962, 3.60690644272, 416.8077000519],
    [0.00000001017, 3.31763307079, 714.2920550459],
    [0.00000001065, 2.69433700165, 1961.8432987595],
    [0.00000000951, 3.58348892983, 1760.07753855241],
    [0.0000000099, 5.04804922105, 6328.0812106155],
    [0.00000001236, 2.70420266349, 263.26416554441],
    [0.00000001104, 3.6957480042, 394.8618040035],
    [0.00000000956, 4.35161784148, 1022.0688586509],
    [0.00000001275, 5.52915230471, 104.33342944339],
    [0.00000001056, 0.843407885, 62.2827947575],
    [0.00000001143, 3.68309637121, 511.7755353134],
    [0.00000000941, 6.19459172994, 555.3106427076],
    [0.00000001191, 1.70227754284, 2313.65989106819],
    [0.0000000117, 2.35872619773, 331.9290548522],
    [0.00000001072, 3.76957511946, 486.9088779582],
    [0.00000001059, 1.961790566, 1471.2460850217],
    [0.00000001044, 3.32798336862, 841.9068640046],
    [0.00000000998, 4.27737444218, 522.28541650049],
    [0.00000001221, 4.50718835641, 473.31243127551],
    [0.00000000926, 0.749410729, 179.1150280107],
    [0.00000001089, 1.63384615205, 1986.9730806731],
    [0.0000000095, 5.54909275925, 899.0168502742],
    [0.00000001071, 5.82307444922, 781.8399944059],
    [0.00000000998, 1.0152465839, 1151.93594618579],
    [0.00000001082, 3.67990060666, 2151.25100677631],
    [0.00000001057, 6.03036726602, 3708.0805731457],
    [0.00000000916, 1.06658994239, 386.00065973601],
    [0.000000012, 6.08851819874, 9793.5570848523],
    [0.00000001139, 0.28838108115, 5845.18814136799],
    [0.00000001219, 3.04610895768, 25771.7550894011],
    [0.00000001118, 6.06188128537, 1080.0726167978],
    [0.00000001043, 3.09698136153, 6261.4963920409],
    [0.00000001172, 1.30540118907, 160.365079915],
    [0.00000000906, 0.26704685647, 1475.4413628432],
    [0.00000000994, 3.40772335472, 1467.57705631699],
    [0.00000000982, 4.97517294679, 1460.4635093162],
    [0.00000001193, 4.90565001031, 1439.75351563271],
    [0.00000001075, 0.2235679847, 3171.2760610503],
    [0.00000000899, 5.66544916782, 606.2008538537],
    [0.0000000123, 1.03855193058, 5334.1440585051],
    [0.00000000928, 0.11962988517, 401.2940274481],
    [0.00000001122, 4.90662779651, 81.9959506997],
    [0.00000000901, 0.25563898411, 428.80205394729],
    [0.00000000912, 2.98585324356, 726.07146849269],
    [0.00000001205, 5.66445689657, 734.6694882018],
    [0.00000001047, 1.79702653012, 1304.6805370581],
    [0.00000001133, 0.34858879514, 733.18501549349],
    [0.00000001109, 4.52514855024, 1259.431462292],
    [0.00000000888, 1.42651506504, 4.4220489625],
    [0.00000000924, 4.20159262156, 633.5031296762],
    [0.00000000924, 4.20159262156, 633.9907646432],
    [0.00000000931, 2.99561921123, 529.82290799351],
    [0.00000000956, 0.90285346431, 1198.14324454341],
    [0.00000001118, 3.26584053082, 26.10731258001],
    [0.00000000962, 0.20948717312, 770.5818458209],
    [0.00000001092, 2.42955422424, 947.28726008359],
    [0.00000000899, 4.43911097152, 9896.64985907089],
    [0.00000001114, 3.28101333017, 210.08633253789],
    [0.00000000935, 3.52348683224, 97.21988244259],
    [0.00000000909, 4.41420701109, 981.1751204007],
    [0.00000000907, 5.10897715653, 3679.1387501755],
    [0.00000001078, 3.68441956491, 429.5357671302],
    [0.00000001223, 0.88035865973, 876.8585059047],
    [0.00000001053, 3.77177323349, 828.16740497],
    [0.00000001159, 0.23541100073, 979.427523134],
    [0.00000001179, 3.99905255489, 261.2371761149],
    [0.00000000872, 3.49839767525, 102.6888980407],
    [0.00000000902, 4.43756731616, 1407.51018671831],
    [0.0000000097, 2.4966487982, 51322.36608391289],
    [0.00000000954, 2.92237254467, 1527.8684363243],
    [0.0000000087, 0.4873910273, 103.0090154295],
    [0.000000011, 0.91640584339, 1229.89893849079],
    [0.0000000098, 5.96363240537, 1246.9012893198],
    [0.0000000098, 5.96363240537, 1246.4136543528],
    [0.00000001025, 1.66758854985, 1187.0975442795],
    [0.00000000899, 2.11281651742, 663.5594104667],
    [0.00000000966, 0.22495487214, 607.00400300581],
    [0.00000000974, 4.98865285908, 600.7842278823],
    [0.00000001052, 4.65227669185, 1901.7764291608],
    [0.00000000939, 3.15077321172, 12573.5090644671],
    [0.00000000875, 0.65916330329, 521.8580277308],
    [0.00000000927, 4.84160265007, 3583.64715792471],
    [0.00000000999, 3.46495043245, 2442.5130945193],
    [0.00000000868, 0.44884060339, 449.7365580394],
    [0.0000000092, 1.89718815697, 184.6010899513],
    [0.00000000916, 3.09091091191, 860.0661112693],
    [0.00000001151, 0.3506471098, 775.6896552516],
    [0.00000001064, 1.71183346254, 9775.39783758759],
    [0.00000000991, 3.19380563552, 447.552002043],
    [0.00000000934, 5.99924499521, 52168.93655363109],
    [0.00000000852, 4.59376258158, 4760.34895633411],
    [0.00000000879, 1.78293804332, 260.6040366685],
    [0.00000000961, 1.02849557968, 10529.9212333511],
    [0.00000000878, 6.2476792901, 166.4817891745],
    [0.00000001023, 1.68125966381, 517.4046096059],
    [0.00000001056, 2.51791980526, 622.2449810912],
    [0.00000000857, 5.19864310731, 905.64276230799],
    [0.00000000858, 2.80895292292, 866.7735213598],
    [0.0000000096, 1.81662419806, 5842.0067476303],
    [0.00000001006, 0.22553531389, 1332.728588151],
    [0.00000000859, 1.05539301878, 1886.7985756338],
    [0.00000001053, 2.62039491434, 527.4871020233],
    [0.00000000937, 5.71553086559, 597.60283414461],
    [0.00000000858, 5.12276714838, 1035.24672528451],
    [0.00000001183, 3.85053522766, 115.3791297073],
    [0.0000000092, 6.0187235739, 589.7385276184],
    [0.0000000092, 6.01872357391, 589.2508926514],
    [0.00000000852, 2.29299187318, 146.13798591339],
    [0.00000000852, 2.29299187318, 146.6256208804],
    [0.00000000844, 0.96512635264, 10.2781257911],
    [0.00000000844, 0.96512635264, 9.79049082409],
    [0.00000000959, 0.3718199491, 177.15498242291],
    [0.00000000959, 1.3762135639, 249.93084342011],
    [0.00000001035, 5.74473561998, 507.3557470833],
    [0.00000000988, 0.40300615994, 67.94549894479],
    [0.00000001133, 0.21196509862, 36.404745446],
    [0.00000000843, 4.90521975782, 178.3788227003],
    [0.00000000843, 3.12599906236, 248.70700314271],
    [0.00000000836, 1.54769372814, 951.2194133467],
    [0.00000001, 1.57140164961, 598.5996718859],
    [0.0000000087, 6.28110425807, 2520.3330744724],
    [0.0000000101, 1.72376746961, 525.26891613211],
    [0.00000000869, 3.26836848865, 803.3007476148],
    [0.00000000862, 5.61027073627, 1336.6607414141],
    [0.00000000865, 4.28123305011, 1535.24510788349],
    [0.00000001156, 5.35022886415, 988.0255428431],
    [0.00000000854, 4.77835810088, 3119.9559667775],
    [0.00000000854, 1.63676544729, 3120.4436017445],
    [0.00000000959, 1.58204951779, 167.80869531589],
    [0.00000000843, 1.22694695097, 769.5729459921],
    [0.00000000819, 0.61008368054, 20006.84263106329],
    [0.00000000871, 0.82479731167, 2015.9149036433],
    [0.00000001145, 1.02486744412, 982.3964685506],
    [0.00000000967, 0.22051521316, 274.09741748721],
    [0.00000000811, 1.93988314156, 310.95842873781],
    [0.00000001076, 2.1237476545, 195.6467902152],
    [0.00000000973, 1.96085545938, 480.00777927849],
    [0.00000000927, 0.69113180699, 221.9284843095],
    [0.00000000927, 4.1984943596, 205.1573415335],
    [0.00000001043, 5.3791293217, 1054.4722462597],
    [0.00000001118, 0.51162175015, 241.3664536058],
    [0.00000001087, 5.65735430058, 26404.5388287143],
    [0.00000000843, 0.59254220586, 9470.05166819489],
    [0.00000000799, 3.81029938361, 556.2738505541],
    [0.00000000916, 3.24185708422, 454.6655490438],
    [0.00000000867, 5.47094937361, 155.43608891061],
    [0.00000001078, 3.723281473, 903.16145185841],
    [0.0000000095, 1.58758889388, 469.48334387639],
    [0.00000000972, 6.06333531011, 317.15695200191],
    [0.00000000793, 2.39958976528, 529.88659846831],
    [0.00000000798, 0.89814256581, 438.1483410543],
    [0.00000000885, 2.38654260174, 685.2301198692],
    [0.00000000791, 6.20377698011, 206.4629958155],
    [0.00000000919, 0.63974984193, 524.25752417581],
    [0.00000000919, 0.63974984193, 523.7698892088],
    [0.00000000841, 4.14693055275, 3590.7607049255],
    [0.00000000841, 1.00533789916, 3590.2730699585],
    [0.00000001022, 1.76356572435, 731.92754532131],
    [0.00000000978, 6.10063170165, 443.6198487799],
    [0.00000000923, 5.46332854009, 261.81332273089],
    [0.0000000086, 0.47994747274, 1784.719685499],
    [0.00000000803, 4.00101244392, 19992.61553706169],
    [0.00000000948, 4.20749999937, 3280.9947473027],
    [0.00000000852, 0.10993118074, 548.0940298428],
    [0.00000000873, 0.85145808105, 63.6039554045],
    [0.00000000956, 0.19219049494, 108.47803102759],
    [0.00000000972, 1.58575475783, 892.7970751507],
    [0.00000000926, 3.30309363763, 1025.6854977289],
    [0.00000000914, 2.39725818747, 832.34563644899],
    [0.0000000103, 6.26161149754, 586.5571338807],
    [0.00000000809, 1.59398504657, 1235.3679540889],
    [0.00000000809, 3.92711557341, 1310.1495526562],
    [0.00000000784, 6.04770590451, 1699.5230339867],
    [0.0000000102, 5.48510992166, 102.9608313197],
    [0.00000000817, 2.1596404916, 5.90652167079],
    [0.00000001007, 4.32504562762, 740.0524842784],
    [0.00000000872, 4.08644694319, 63.38020623529],
    [0.00000000934, 4.717008513, 721.8932370137],
    [0.0000000078, 0.21966320366, 930.7725442216],
    [0.00000001031, 2.47713291345, 738.0803766031],
    [0.00000000793, 4.26011752121, 746.4152717538],
    [0.00000001085, 1.02451872519, 592.4468406041],
    [0.00000000961, 2.67254071371, 1120.3927005595],
    [0.00000000888, 1.70195193954, 26514.7451499337],
    [0.00000000782, 5.6841583677, 519.63984183961],
    [0.000000008, 3.20991142806, 4113.3381230193],
    [0.00000000945, 4.06069039712, 1673.7626047542],
    [0.0000000085, 0.3104766325, 580.33735875721],
    [0.0000000103, 1.16963154394, 3657.24811383991],
    [0.00000000775, 3.00079525151, 735.58451193849],
    [0.00000000775, 3.00079525151, 736.0721469055],
    [0.00000000951, 4.36992299634, 604.2287461784],
    [0.0000000076, 4.77344534648, 3267.2552882681],
    [0.00000000802, 4.44315712396, 362.6184750891],
    [0.00000000866, 5.12332739411, 1293.63483679419],
    [0.00000000766, 1.96682285527, 188.6762555663],
    [0.00000000768, 1.6275921232, 845.57589270931],
    [0.00000000766, 4.4675768564, 2439.3317007816],
    [0.00000000769, 5.87087902642, 1051.9763815951],
    [0.00000000776, 2.78600818951, 2014.2703722406],
    [0.00000000771, 2.78598583977, 1052.07274981469],
    [0.00000000822, 2.8483403626, 582.62498061761],
    [0.00000001002, 2.61286504444, 52183.1636476327],
    [0.00000000828, 4.17948532199, 631.7891623043],
    [0.00000000973, 3.91693566169, 519.1497147451],
    [0.00000000839, 5.64763751852, 13362.6935242827],
    [0.00000000842, 4.82173037387, 204.45725824539],
    [0.00000000756, 1.58063538394, 693.82813957829],
    [0.00000000756, 1.58063538394, 694.31577454531],
    [0.00000000747, 4.53970527389, 962.7527485776],
    [0.00000000916, 0.53251818292, 688.41151360689],
    [0.00000000769, 3.11155934055, 6058.48723680599],
    [0.00000000756, 0.54984492104, 545.7157852572],
    [0.0000000083, 3.49429956542, 595.47066777489],
    [0.00000000831, 5.48519211288, 436.8763166671],
    [0.00000000776, 2.95329359189, 187.9949320101],
    [0.00000000757, 2.65993029948, 5496.2254698659],
    [0.00000000977, 4.63633631623, 1055.43296197871],
    [0.00000000737, 5.1123494613, 225.58545092669],
    [0.0000000094, 1.37204266374, 462.00609858071],
    [0.00000000881, 4.14004497053, 157.6713211443],
    [0.00000000881, 3.89117384965, 269.41450469871],
    [0.00000000768, 4.54804861178, 2093.2472486294],
    [0.00000000945, 3.54564231189, 347.6551757771],
    [0.00000000789, 1.23325676313, 678.27413943531],
    [0.00000000894, 3.71784833817, 185.08872491831],
    [0.00000000887, 1.90161032677, 938.63685074779],
    [0.00000000848, 1.73960670139, 1016.59984305279],
    [0.00000000778, 4.72868742196, 5753.6287023803],
    [0.00000000778, 4.72868742196, 5753.14106741329],
    [0.00000000843, 2.59704127717, 976.4922076122],
    [0.000000009, 3.76941852958, 655.1738390787],
    [0.0000000073, 4.74108034798, 497.9545782221],
    [0.00000000879, 4.77364347651, 494.2348732801],
    [0.00000000728, 2.60603774003, 995.88984936931],
    [0.00000000729, 0.77581736648, 632.58810593949],
    [0.00000000729, 0.77581736648, 633.07574090651],
    [0.00000000841, 2.4574016392, 1051.06135785839],
    [0.0000000081, 4.65306063985, 3900.0390275813],
    [0.00000000774, 3.20387240385, 451.48415530609],
    [0.00000000792, 3.21012047679, 193.93282284329],
    [0.00000000894, 5.93934831263, 103.28840759231],
    [0.00000000744, 4.19216354937, 662.7750210465],
    [0.00000001019, 2.49847463002, 7232.49527644471],
    [0.0000000072, 1.56486927863, 103711.47146249928],
    [0.00000000776, 0.11554513153, 1703.4551872498],
    [0.00000001001, 0.71986534852, 1126.54303971381],
    [0.0000000086, 0.28002712469, 2748.6100234374],
    [0.00000000716, 4.37859929602, 4319.0360364895],
    [0.00000000716, 4.37859929602, 4319.5236714565],
    [0.00000000797, 5.59551319827, 529.9829666879],
    [0.00000000729, 4.65941028609, 1649.383582366],
    [0.00000000803, 4.13945714434, 151.0163006805],
    [0.00000000765, 3.49230150581, 1379.4621356254],
    [0.00000000765, 3.49230150581, 1379.9497705924],
    [0.00000000749, 2.29649366933, 785.772147669],
    [0.00000000836, 2.51999814689, 4010.24534880071],
    [0.00000000727, 3.33280142284, 608.1608994415],
    [0.00000000727, 0.19120876925, 608.64853440851],
    [0.00000000719, 5.79361123899, 467.68335698301],
    [0.00000000709, 0.59726160167, 103.5490400232],
    [0.00000000709, 3.73885425526, 103.0614050562],
    [0.0000000092, 1.8086920657, 870.7056746229],
    [0.00000000716, 4.59064021199, 664.78325074409],
    [0.00000000857, 0.0253719563, 2306.5463440674],
    [0.00000000724, 3.13275093039, 740.52556503041],
    [0.00000000708, 3.15032913377, 2431.4673942554],
    [0.00000000706, 0.24440760951, 102.63650841399],
    [0.00000000706, 3.3860002631, 103.12414338101],
    [0.00000000824, 5.06503970891, 1163.6817297378],
    [0.00000000722, 1.50443824904, 171.2170915897],
    [0.00000000723, 2.3165070054, 829.37669103239],
    [0.0000000072, 0.238315243, 255.8687342533],
    [0.00000000956, 0.04233388408, 3068.1832868317],
    [0.000000008, 3.03519680815, 279.72649177971],
    [0.000000008, 4.99602201203, 147.3593340633],
    [0.00000000868, 0.37647106732, 669.4009330803],
    [0.00000000769, 5.99489096281, 3465.8396547375],
    [0.00000000745, 2.84189249473, 843.145258497],
    [0.00000000848, 2.77841948796, 103.3847758119],
    [0.00000000703, 4.75219753735, 4003.1318017999],
    [0.00000000719, 4.535010645, 9988.69693302559],
    [0.00000000818, 5.15275579739, 311.48218572709],
    [0.00000000901, 0.79248369499, 937.8860912224],
    [0.00000000783, 5.1163899372, 199.83708378171],
    [0.00000000783, 6.05642153657, 227.24874206131],
    [0.00000000909, 0.64248903432, 4009.7577138337],
    [0.00000000711, 1.7689264306, 457.3738620295],
    [0.00000000705, 3.126791352, 5653.98044645779],
    [0.00000000712, 6.07513529815, 354.2810878109],
    [0.00000000733, 0.21809967139, 37.6285857234],
    [0.00000000708, 1.27557908922, 840.6975779422],
    [0.00000000708, 1.27557908922, 840.2099429752],
    [0.00000000695, 6.08215837207, 812.70191647599],
    [0.00000000695, 2.94056571848, 813.189551443],
    [0.00000000736, 5.91292146424, 403.9474586796],
    [0.00000000733, 2.29907033586, 182.0357893175],
    [0.00000000836, 5.01712963721, 2331.8191383329],
    [0.00000000928, 0.59357203459, 842.13386654071],
    [0.00000000768, 3.70421774103, 1460.2003847578],
    [0.00000000685, 4.29010164874, 455.29619636271],
    [0.00000000792, 3.19395503975, 5422.5221037551],
    [0.00000000837, 3.85260493508, 570.7761312016],
    [0.00000000682, 3.31484357591, 3693.8534791441],
    [0.00000000752, 0.5655624143, 413.34862754081],
    [0.00000000817, 3.10337024087, 391.73279989249],
    [0.00000000681, 0.83323807589, 458.33457774851],
    [0.00000000803, 0.28965764669, 418.49006686629],
    [0.00000000681, 1.95625262651, 414.5749599457],
];

const Y1: &[Term] = &[
    [0.09285877988, 5.32917891541, 0.2438174835],
    [0.0308650168, 2.70413999679, 426.8420083595],
    [0.02728479923, 4.27396756341, 206.42936592071],
    [0.02644990371, 3.76176749725, 220.6564599223],
    [0.00629201988, 5.03696656027, 7.3573644843],
    [0.00256626023, 1.95374338915, 640.1411037975],
    [0.00312353889, 3.25876676291, 419.72846135871],
    [0.00189297041, 2.91534956216, 433.9555553603],
    [0.0020446502, 5.78983620425, 213.5429129215],
    [0.00118113185, 5.87589622232, 110.45013870291],
    [0.00067024295, 2.16159727865, 316.6356871401],
    [0.00066948413, 3.63141659236, 227.77000692311],
    [0.00031931062, 4.42042826334, 199.3158189199],
    [0.00024548187, 3.29398145587, 205.9417309537],
    [0.00030521021, 4.89424590805, 14.47091148511],
    [0.00022265017, 4.62323431127, 103.3365917021],
    [0.0001893952, 1.20474851114, 853.4401992355],
    [0.00018082904, 3.51824365057, 209.6107596584],
    [0.00017786477, 4.53241903621, 217.4750661846],
    [0.00016307253, 3.29827125771, 216.72430665921],
    [0.00016919177, 3.01391698262, 633.0275567967],
    [0.00015920273, 4.74692264945, 210.36151918381],
    [0.00016167186, 4.03963160527, 323.74923414091],
    [0.00014472589, 2.10335699916, 647.25465079831],
    [0.00011071575, 4.74242577082, 117.5636857037],
    [0.00009887534, 3.61558352957, 202.4972126576],
    [0.0000871393, 4.46375520442, 224.5886131854],
    [0.00006197025, 2.9354398179, 213.0552779545],
    [0.00005502258, 2.83240853648, 441.06910236111],
    [0.00005466098, 1.03278600709, 11.2895177474],
    [0.00003484091, 4.11221224874, 6.86972951729],
    [0.00003596198, 4.07360530172, 309.0345051723],
    [0.00003029001, 2.81952991155, 522.3336006103],
    [0.00003353859, 5.31984150246, 95.7354097343],
    [0.00002987715, 4.07245500326, 309.5221401393],
    [0.00002732424, 2.53884637625, 149.8070146181],
    [0.00003741808, 3.25277228789, 412.6149143579],
    [0.00002374342, 3.28677124286, 198.82818395289],
    [0.00002875345, 1.68013950973, 426.3543733925],
    [0.00002121841, 3.273027786, 220.16882495529],
    [0.00002386687, 1.79649482549, 109.9625037359],
    [0.00001755551, 5.48701989649, 277.2788112249],
    [0.00001690652, 2.40558615589, 422.9098550964],
    [0.00001545396, 3.73180599039, 330.8627811417],
    [0.00001447492, 0.46419209839, 4.1759707466],
    [0.00001392451, 0.46330792664, 1066.7392946735],
    [0.00001331483, 3.49216178249, 234.8835539239],
    [0.00001452348, 4.64285489428, 3.42521122121],
    [0.00001285559, 0.83411182275, 415.7963080956],
    [0.00001159539, 3.03310034622, 537.0483295789],
    [0.00001128476, 3.88012638153, 423.66061462181],
    [0.00001131769, 4.43729716045, 529.9347825781],
    [0.00001127023, 1.31091242342, 860.55374623631],
    [0.00001101803, 2.50576870008, 430.02340209721],
    [0.00001061927, 2.81261932039, 846.3266522347],
    [0.0000134336, 1.41831229286, 211.09523236671],
    [0.0000133164, 0.33818120038, 215.99059347631],
    [0.00001287848, 0.51354213126, 522.8212355773],
    [0.00001050973, 1.9856971882, 412.12727939089],
    [0.00000900723, 2.55020173482, 838.72547026689],
    [0.00000882663, 3.84497584849, 437.8877086234],
    [0.00000924505, 5.02323714134, 743.23387801611],
    [0.00000876882, 4.58871940602, 96.2230447013],
    [0.00000905253, 4.94395759972, 3.6883357796],
    [0.00000820808, 3.17476222193, 223.83785366],
    [0.00000844907, 3.81271524339, 625.42637482889],
    [0.00000760731, 5.03884679059, 625.9140097959],
    [0.00000657423, 3.32272595203, 316.14805217309],
    [0.00000813631, 4.73875446278, 21.5844584859],
    [0.00000642768, 4.79907912774, 1059.6257476727],
    [0.00000657845, 5.470819149, 88.6218627335],
    [0.00000715042, 4.55303572982, 430.7741616226],
    [0.00000596876, 3.52791235957, 124.6772327045],
    [0.0000047202, 2.03831166729, 654.3681977991],
    [0.00000467656, 2.94972694776, 515.2200536095],
    [0.00000472526, 4.89215133877, 203.247972183],
    [0.00000487417, 5.85503954683, 736.1203310153],
    [0.00000402114, 2.85533132593, 86.07111631471],
    [0.00000376954, 2.14121779282, 76.50988875911],
    [0.0000041941, 1.17666971099, 742.74624304909],
    [0.00000439384, 4.19607195732, 301.9209581715],
    [0.00000458871, 2.23384913618, 529.44714761109],
    [0.00000345395, 4.60405141742, 192.2022719191],
    [0.00000334209, 2.2826892376, 1155.1173399235],
    [0.00000330276, 5.07000098007, 302.40859313851],
    [0.00000339713, 1.16737882478, 218.2087793675],
    [0.0000030495, 4.89660174852, 231.70216018621],
    [0.00000312395, 0.79548009041, 629.0954035336],
    [0.00000311746, 3.50532316923, 941.8182444855],
    [0.00000299095, 0.58884669599, 208.8770464755],
    [0.00000299955, 1.74484418656, 728.5191490475],
    [0.00000271105, 1.132834618, 288.32451148881],
    [0.00000260779, 5.5825480943, 18.40306474821],
    [0.00000278736, 0.64654515892, 632.5399218297],
    [0.00000335527, 1.50873501393, 203.9816853659],
    [0.00000259607, 4.43314622304, 10.538758222],
    [0.00000263983, 1.98364017133, 363.1061100561],
    [0.00000291544, 0.24051609787, 223.1041404771],
    [0.00000214376, 4.46071700955, 208.1262869501],
    [0.00000208551, 3.5934777922, 218.9595388929],
    [0.00000208257, 2.81646625431, 408.68276109481],
    [0.00000211653, 0.53562740874, 138.76131435421],
    [0.00000199845, 3.86657932388, 13.9832765181],
    [0.00000195781, 1.9250798839, 52.446380556],
    [0.00000192346, 4.64457398897, 201.01273994931],
    [0.00000191573, 5.16049975639, 341.01470952831],
    [0.00000185995, 0.07444798265, 948.9317914863],
    [0.00000168803, 2.67981533571, 831.6119232661],
    [0.00000170172, 5.89341892618, 350.5759370839],
    [0.00000167553, 3.43189093041, 226.07308589371],
    [0.0000017751, 3.37006198906, 210.6221516147],
    [0.00000177755, 4.64994019967, 216.4636742283],
    [0.00000157494, 0.14772881381, 195.38366565681],
    [0.00000162215, 4.4458783563, 956.53297345411],
    [0.00000160622, 3.78223230286, 127.22797912329],
    [0.00000147298, 5.02251206802, 9.8050450391],
    [0.00000177635, 4.69945913164, 160.852714882],
    [0.00000170308, 1.06394430192, 207.913838629],
    [0.00000158062, 0.92038060554, 1059.1381127057],
    [0.00000138665, 2.01815199316, 1471.50920958009],
    [0.00000150976, 1.56848256275, 636.2089505344],
    [0.00000136839, 2.94611079491, 544.1618765797],
    [0.00000163932, 0.66823863663, 219.171987214],
    [0.00000164921, 3.04782245643, 22.3352180113],
    [0.00000134204, 5.97046820042, 703.8770021009],
    [0.00000141934, 2.16098044416, 202.0095776906],
    [0.00000153018, 5.84706089618, 56.3785338191],
    [0.00000132722, 2.40576881332, 750.3474250169],
    [0.00000136617, 3.21579900111, 1258.21011414209],
    [0.00000124984, 2.71780492845, 448.1826493619],
    [0.0000013831, 2.83136566148, 142.6934676173],
    [0.0000012114, 4.87825139023, 949.4194264533],
    [0.00000146873, 2.0460100833, 845.8390172677],
    [0.00000135623, 5.56318477713, 490.5779066629],
    [0.00000114737, 2.40589233064, 433.46792039329],
    [0.00000107506, 1.17561460871, 565.35950523021],
    [0.00000105407, 2.01232380969, 209.35012722751],
    [0.00000123012, 1.28213994555, 483.4643596621],
    [0.00000104647, 6.01500032787, 217.73569861551],
    [0.00000123445, 3.28644134532, 266.233110961],
    [0.00000121327, 3.9151567828, 618.3128278281],
    [0.00000121539, 0.7092700313, 515.70768857651],
    [0.0000009833, 5.98392277878, 1280.0383901115],
    [0.00000123139, 0.15397612176, 12.77399045571],
    [0.00000106461, 1.50068457652, 1044.9110187041],
    [0.00000134338, 1.70318102108, 419.2408263917],
    [0.0000010753, 0.47701797778, 424.39432780471],
    [0.00000114356, 1.93414468084, 270.1652642241],
    [0.00000094347, 6.05574583632, 1265.32366114289],
    [0.00000104237, 5.37674274043, 70.6056278207],
    [0.0000008841, 0.52764897299, 1073.85284167431],
    [0.00000091547, 4.90814232105, 106.5179854398],
    [0.00000084219, 4.60141274305, 113.6315324406],
    [0.00000091641, 0.73842419997, 497.69145366371],
    [0.00000080939, 3.1373823086, 651.1868040614],
    [0.00000082304, 1.71469250601, 643.32249753521],
    [0.00000099237, 1.11729387995, 639.6534688305],
    [0.00000073063, 2.41573369601, 1148.00379292269],
    [0.00000079913, 1.43967739894, 191.45151239371],
    [0.00000070813, 0.83698988794, 251.6759485593],
    [0.00000072632, 6.0309346977, 107.2687449652],
    [0.00000075817, 6.15403374919, 284.39235822571],
    [0.00000072415, 3.44390490336, 191.7146369521],
    [0.00000084109, 0.20089617421, 219.6932520758],
    [0.00000066814, 3.27992928467, 636.95971005981],
    [0.00000064253, 3.30962112459, 71.09326278771],
    [0.00000073347, 2.74891631991, 344.9468627914],
    [0.00000061578, 3.56151396455, 479.532206399],
    [0.00000060447, 1.75736763354, 1787.9010792367],
    [0.00000063039, 2.40833995336, 437.136949098],
    [0.00000064265, 2.93065048354, 1574.6019837987],
    [0.00000058169, 1.49924118883, 75.0254160508],
    [0.00000065491, 0.66720972356, 1375.52998236229],
    [0.00000057055, 2.86226169724, 98.6561710411],
    [0.00000063072, 2.25676507609, 359.173956793],
    [0.00000076825, 4.97299930649, 839.2131052339],
    [0.00000065944, 1.58727129595, 207.3925737672],
    [0.00000065704, 1.95606870146, 2.9375762542],
    [0.00000059449, 2.68338567532, 417.2807808039],
    [0.00000066539, 1.76632812482, 1162.23088692429],
    [0.00000053194, 3.14361310813, 227.2823719561],
    [0.0000006389, 0.41831388362, 235.6343134493],
    [0.00000052968, 0.91696357138, 175.40987728371],
    [0.0000005148, 3.83078819944, 416.547067621],
    [0.00000053788, 5.42039296703, 114.38229196601],
    [0.00000052017, 0.4406583279, 220.7046440321],
    [0.00000048475, 1.74014879125, 209.12312469139],
    [0.00000048625, 5.04094706317, 63.9797157869],
    [0.00000047377, 5.7616039042, 1581.7155307995],
    [0.00000066468, 2.96069437842, 337.9763281425],
    [0.00000047697, 0.3470522157, 352.06040979221],
    [0.000000504, 6.23334184252, 429.28968891431],
    [0.00000051302, 6.27400713228, 121.4958389668],
    [0.00000048534, 1.51516380602, 151.2914873264],
    [0.00000050418, 1.08978230509, 181.2995840071],
    [0.00000052765, 2.41157347334, 4.9096839295],
    [0.0000005613, 5.0445900205, 404.7506078317],
    [0.00000053587, 5.28731972971, 554.31380496631],
    [0.00000050974, 3.62783678854, 934.70469748469],
    [0.00000044236, 1.36935810506, 63.49208081989],
    [0.00000046842, 0.6754238078, 245.7862418359],
    [0.0000004153, 4.46708578473, 99.40443843901],
    [0.00000044045, 0.68746998587, 205.46615807421],
    [0.0000004058, 1.25223032785, 867.6672932371],
    [0.0000004103, 5.60558897869, 81.50831573269],
    [0.00000040882, 2.19047548175, 621.98185653281],
    [0.00000038986, 2.89088740116, 131.79077970531],
    [0.00000045904, 5.16474077315, 1589.3167127673],
    [0.00000053423, 5.90391742845, 1052.51220067191],
    [0.00000041233, 1.27392005885, 1361.3028883607],
    [0.00000046867, 4.41668443242, 10.8018827804],
    [0.00000046594, 6.19397089476, 323.2615991739],
    [0.00000037309, 1.75965892305, 194.89603068979],
    [0.00000036647, 0.31898918015, 148.32254190981],
    [0.00000041194, 4.30940153096, 644.0732570606],
    [0.00000036297, 4.09379268805, 445.00125562421],
    [0.00000036204, 1.17922364807, 214.2936724469],
    [0.00000041215, 0.93604859842, 198.5650593945],
    [0.00000045013, 0.39607313901, 842.3944989716],
    [0.00000034449, 2.14089859356, 1464.3956625793],
    [0.00000034256, 1.30837397954, 289.8089841971],
    [0.0000003682, 1.40746554167, 206.3811818109],
    [0.00000033887, 5.79726117026, 89.10949770051],
    [0.00000036762, 5.38503749099, 265.745475994],
    [0.00000032982, 1.07867972783, 276.79117625789],
    [0.00000033116, 3.67609767645, 178.11819026941],
    [0.00000032822, 0.6239582557, 212.79215339611],
    [0.00000037519, 0.81273715463, 228.5207664485],
    [0.00000031997, 0.2304445714, 275.7943385166],
    [0.00000040913, 3.86314191833, 209.87388421679],
    [0.00000030291, 2.81092945022, 78.9575693139],
    [0.00000029064, 4.35733221797, 248.9676355736],
    [0.00000031114, 2.65185710054, 1890.9938534553],
    [0.00000028459, 2.69371515649, 102.84895673509],
    [0.00000035352, 0.80856131309, 501.62360692681],
    [0.00000027208, 1.50128394987, 2104.2929488933],
    [0.00000037148, 6.0980747659, 729.0067840145],
    [0.00000033504, 5.75754294461, 436.4032359151],
    [0.00000032029, 1.64757033255, 414.31183538731],
    [0.00000027479, 2.28916876539, 114.6429243969],
    [0.00000029371, 4.1399588782, 215.0273856298],
    [0.0000003041, 0.83533364902, 31.9995114309],
    [0.00000033556, 1.41630051566, 1478.62275658089],
    [0.00000028365, 4.24070805056, 355.99256305531],
    [0.00000024664, 2.99088916204, 427.805216206],
    [0.00000028864, 0.42973261435, 1691.9218520189],
    [0.00000033503, 6.18224013517, 735.6326960483],
    [0.00000027468, 3.51804419384, 405.5013673571],
    [0.00000023818, 3.63547565864, 190.9638774267],
    [0.00000023542, 1.41600136615, 278.76328393321],
    [0.00000023335, 5.49828745732, 1898.10740045609],
    [0.0000002481, 5.54564487364, 425.878800513],
    [0.00000023968, 0.3667718156, 431.5078748055],
    [0.00000025517, 2.45859967105, 69.3963417583],
    [0.00000022253, 1.40396872946, 602.00806815971],
    [0.0000002319, 5.24458718751, 618.8004627951],
    [0.00000021849, 2.16979732894, 299.37021175271],
    [0.0000002127, 5.26652889356, 917.1760975389],
    [0.00000022382, 1.28310720891, 576.4052054941],
    [0.00000021104, 2.44842000288, 319.8170808778],
    [0.00000024718, 3.34396844841, 1251.0965671413],
    [0.0000002079, 3.2925829069, 241.9971009247],
    [0.00000025298, 5.95012841054, 422.1761419135],
    [0.00000019818, 5.84256592114, 5.6604434549],
    [0.0000001953, 3.52863763848, 313.4542934024],
    [0.00000023121, 2.90337571001, 230.9514006608],
    [0.00000019612, 3.11172042496, 508.10650660869],
    [0.00000019333, 4.455919907, 134.3415261241],
    [0.00000020375, 5.87114204897, 426.8901924693],
    [0.00000020742, 3.36125223647, 312.70353387701],
    [0.00000019203, 3.7423310332, 320.5678404032],
    [0.00000018481, 1.91890218206, 39.6006933987],
    [0.00000021067, 3.32302810096, 421.4253823881],
    [0.00000019538, 6.1771230216, 189.1638905333],
    [0.00000020461, 3.99739791776, 327.68138740401],
    [0.00000021171, 1.20539425934, 221.61966776881],
    [0.0000001913, 1.70449321765, 98.91680347199],
    [0.00000018295, 5.35670142029, 295.2950461377],
    [0.0000001816, 3.80256763164, 205.67860639531],
    [0.00000017549, 5.90563873127, 120.1144321225],
    [0.00000017626, 2.90948901796, 956.04533848709],
    [0.00000016792, 1.87396327818, 1780.78753223589],
    [0.00000016458, 2.73724850309, 439.37218133171],
    [0.00000018239, 5.19351531548, 6276.2061204741],
    [0.00000016441, 4.13905167455, 1169.83206889211],
    [0.00000016263, 4.44980749629, 1272.9248431107],
    [0.00000016077, 0.35334193612, 778.6586006682],
    [0.00000018919, 5.6322574764, 348.1282565291],
    [0.00000020156, 3.71856419261, 212.05844021321],
    [0.00000017804, 4.60517305544, 6290.4332144757],
    [0.00000022054, 4.33821912194, 294.80741117069],
    [0.00000015573, 6.26818148592, 74.53778108379],
    [0.00000016309, 1.07119798583, 1677.6947580173],
    [0.00000018944, 1.64030810533, 127.71561409031],
    [0.00000017127, 0.333797043, 10206.4158166937],
    [0.0000001969, 0.46228960012, 696.7634551001],
    [0.00000020455, 3.68158411673, 117.0760507367],
    [0.00000016447, 1.86360821642, 237.9219353097],
    [0.00000016503, 2.39093241573, 2207.38572311189],
    [0.00000020378, 2.67260865639, 426.7938242497],
    [0.00000016713, 6.02955183779, 10220.6429106953],
    [0.00000017063, 3.10475966052, 15.2216710105],
    [0.00000018187, 4.63183796319, 167.07249000551],
    [0.0000001483, 0.96104361429, 415.3086731286],
    [0.00000015128, 6.22779956266, 710.99054910171],
    [0.00000014162, 4.64972656382, 525.7419968841],
    [0.00000014139, 0.42327996702, 39.1130584317],
    [0.0000001806, 1.12205088158, 1795.0146262375],
    [0.00000013362, 1.30455477545, 106.0303504728],
    [0.00000013903, 5.77275028636, 312.4429014461],
    [0.00000015359, 3.68905633066, 182.5234242845],
    [0.00000013906, 2.22202764942, 59.55992755679],
    [0.00000013001, 1.87269751242, 87.555589023],
    [0.00000013054, 3.3380635806, 196.2774375341],
    [0.00000015661, 4.95405745189, 1162.7185218913],
    [0.00000017412, 3.73906512638, 202.760337216],
    [0.00000014557, 2.97972992288, 381.5954257209],
    [0.0000001711, 6.00385232407, 432.471082652],
    [0.00000012702, 1.25047898924, 2420.68481854989],
    [0.00000017195, 5.38272410647, 536.5606946119],
    [0.00000012663, 4.98811886581, 1376.0176173293],
    [0.00000015239, 3.75258625939, 429.7627696663],
    [0.00000012562, 5.93423402721, 852.9525642685],
    [0.00000012487, 2.21693371299, 757.4609720177],
    [0.00000012205, 1.93673292559, 661.4817447999],
    [0.00000014071, 2.49266457872, 395.8225197225],
    [0.00000013589, 4.88876925401, 97.11681657861],
    [0.00000013297, 0.85813242995, 849.5080459724],
    [0.0000001295, 1.73883852923, 91.8032564712],
    [0.000000128, 2.48384043874, 1272.4372081437],
    [0.0000001406, 1.76101820041, 116.18227885939],
    [0.00000013165, 6.22232430384, 129.6756596781],
    [0.00000011819, 5.25276003174, 431.03479405351],
    [0.00000011579, 3.6514057377, 144.39038864671],
    [0.00000011596, 4.6538073981, 230.8083883089],
    [0.00000012157, 4.2670149651, 374.15181032],
    [0.00000011328, 5.22634156214, 2214.4992701127],
    [0.0000001331, 3.05839708528, 1567.48843679789],
    [0.0000001376, 3.68502527304, 216.9874312176],
    [0.00000011244, 0.07984446041, 777.17412795991],
    [0.00000011256, 0.76010615725, 1582.2031657665],
    [0.00000011849, 1.82233217301, 305.5899868762],
    [0.00000011016, 2.47001157319, 416.059432654],
    [0.00000010858, 0.99488682955, 422.42222012939],
    [0.00000014447, 1.13660537122, 333.9011625275],
    [0.00000010877, 4.92169700962, 67.424234083],
    [0.00000010671, 4.02549503966, 426.3207434977],
    [0.00000010673, 4.24959012167, 221.40721944771],
    [0.00000013923, 1.76345867331, 558.2459582294],
    [0.00000012161, 4.58759593895, 28.6980054867],
    [0.00000011528, 3.2485080178, 432.2586343309],
    [0.00000012972, 4.42656189319, 196.8681383651],
    [0.00000010573, 2.73606095442, 145.874861355],
    [0.00000011572, 3.41892921748, 5849.1202946311],
    [0.00000012498, 0.2120882004, 2008.3137216755],
    [0.00000010593, 2.57833657495, 343.4623900831],
    [0.00000012818, 2.76088492373, 216.2366716922],
    [0.0000001023, 5.88163152868, 199.528267241],
    [0.00000010672, 5.32880327015, 84.5866436064],
    [0.00000010068, 6.07595138018, 206.9506307825],
    [0.00000011596, 0.26708370981, 1155.6049748905],
    [0.00000010203, 5.80527534922, 192.935985102],
    [0.00000009849, 5.36800138647, 767.61290040431],
    [0.00000010252, 4.92833809216, 618.0497032697],
    [0.00000010915, 1.22365645831, 200.2095907972],
    [0.00000009693, 2.62845142458, 99.6675629974],
    [0.00000009672, 4.70950406981, 238.815707187],
    [0.00000009664, 1.75114701217, 182.05034353251],
    [0.0000000986, 1.31031161383, 572.473052231],
    [0.00000010186, 5.1288742034, 20.850745303],
    [0.00000010831, 4.84548447475, 9779.32999085069],
    [0.00000009746, 3.38574766621, 185.2317372702],
    [0.00000009573, 2.36163965903, 281.210964488],
    [0.00000011944, 3.75743101287, 62.0076081116],
    [0.00000009779, 0.88460862761, 188.41313100791],
    [0.00000010421, 0.80662653956, 404.2629728647],
    [0.00000010874, 4.76437370447, 153.73916788121],
    [0.00000010712, 4.51706019623, 427.3632732213],
    [0.00000009203, 5.30048466028, 212.27088853431],
    [0.00000009203, 2.7307341599, 214.81493730871],
    [0.00000010194, 2.85037947546, 5863.3473886327],
    [0.00000009371, 2.14963709425, 227.557558602],
    [0.00000010238, 4.28151996864, 244.5624015585],
    [0.00000010084, 0.80678073222, 1265.81129610991],
    [0.00000010456, 6.15818049342, 41.4006802921],
    [0.00000010166, 5.68487873505, 143.9027536797],
    [0.00000011381, 6.15494704224, 156.9205616189],
    [0.00000012113, 6.181542826, 563.87503252191],
    [0.00000010043, 0.52437707771, 226.8762350458],
    [0.00000009235, 0.46021438011, 159.36824217371],
    [0.00000008818, 2.88309374002, 50.9619078477],
    [0.00000009068, 2.68400913334, 131.6477673534],
    [0.00000010089, 3.30634961501, 260.01333583751],
    [0.00000010283, 4.03488999891, 46.71424039951],
    [0.00000009854, 2.93320887736, 333.4135275605],
    [0.00000009008, 5.89793163445, 637.69342324271],
    [0.00000008926, 2.22929142122, 234.149840741],
    [0.00000008557, 1.65572129459, 963.6465204549],
    [0.00000010257, 1.13994818513, 64.97655352819],
    [0.00000009526, 4.27706558639, 9793.5570848523],
    [0.00000009414, 2.65613957745, 67.91186905],
    [0.00000009628, 3.38030516392, 326.9306278786],
    [0.00000011719, 4.16368793873, 45.3328335552],
    [0.00000008304, 1.17598268665, 547.2002579655],
    [0.00000008224, 1.59987405703, 2097.1794018925],
    [0.00000008279, 4.61172057056, 241.8540885728],
    [0.00000009189, 1.68565081278, 556.7614855211],
    [0.00000008334, 0.86145365394, 238.6726948351],
    [0.0000000803, 0.00151213347, 245.03548231051],
    [0.00000010377, 0.86654919644, 212.6491410442],
    [0.00000010377, 0.88148431656, 214.43668479881],
    [0.00000009061, 1.1590683521, 206.47755003051],
    [0.00000008325, 2.88284393514, 824.4983762653],
    [0.00000007948, 2.23981845794, 423.17297965479],
    [0.0000001052, 0.59831170486, 93.1846633155],
    [0.00000008773, 2.41905049963, 347.6406215621],
    [0.00000008377, 2.10271496997, 2523.7775927685],
    [0.00000008448, 2.16286795108, 1588.82907780029],
    [0.00000008685, 3.73032873272, 220.60827581251],
    [0.00000007716, 3.18762880947, 78.2068097885],
    [0.00000007794, 5.75334057605, 411.8641548325],
    [0.00000008324, 1.43925082351, 646.76701583129],
    [0.00000007401, 5.24566403741, 329.48137429739],
    [0.00000008108, 2.83411309649, 60.52313540329],
    [0.00000007383, 5.70976794256, 259.1195639602],
    [0.00000007791, 1.00733061725, 174.1860370063],
    [0.00000007076, 6.22401926042, 464.97504399731],
    [0.00000009308, 3.59155053097, 273.34665796181],
    [0.00000009741, 0.81596806036, 2111.40649589409],
    [0.00000007187, 2.33757896013, 864.4858994994],
    [0.00000007014, 1.65947862448, 627.61093082531],
    [0.00000006966, 4.30763849421, 282.6954371963],
    [0.00000007308, 4.98329991415, 942.3058794525],
    [0.00000006845, 5.23018796148, 1493.3374855495],
    [0.00000006779, 6.03735095188, 357.68948408471],
    [0.00000007128, 2.30863250694, 134.8291610911],
    [0.00000007238, 4.23528950033, 749.8597900499],
    [0.00000006975, 1.29870798692, 267.71758366931],
    [0.00000007167, 2.38189224267, 459.0853372739],
    [0.00000007917, 1.93600980484, 23.81969071961],
    [0.00000006648, 6.02714942107, 1287.15193711231],
    [0.000000068, 6.1706793317, 561.4273519671],
    [0.00000008501, 3.77133955917, 224.1009782184],
    [0.00000006569, 6.17574800136, 339.53023682],
    [0.00000008044, 5.50051730143, 196.1344251822],
    [0.00000006518, 4.64724104258, 638.65663108921],
    [0.00000007597, 2.99211896084, 186.71620997851],
    [0.00000008282, 5.61743026825, 82.13896305161],
    [0.00000007088, 1.11525946892, 570.98857952271],
    [0.00000006908, 1.59500149455, 526.7533888404],
    [0.00000006418, 2.40736050441, 106.7811099982],
    [0.00000006362, 0.93818716151, 1994.08662767389],
    [0.00000006216, 0.45259421413, 171.8984151459],
    [0.00000006708, 0.91000084421, 508.5941415757],
    [0.00000007258, 2.77271169877, 1883.8803064545],
    [0.00000007633, 1.81311259252, 295.4380584896],
    [0.00000006841, 3.13369052026, 329.9690092644],
    [0.00000005996, 5.16451756634, 334.7949344048],
    [0.00000005926, 0.99533834681, 2737.0766882065],
    [0.00000006244, 5.97077260556, 533.1161763158],
    [0.00000006129, 4.63572550497, 215.8305347819],
    [0.00000006129, 3.39549331521, 211.2552910611],
    [0.0000000597, 1.16627507303, 193.8991929485],
    [0.00000005955, 6.01270486078, 128.7124518316],
    [0.00000007108, 6.27572187728, 427.5927678849],
    [0.00000005852, 4.69412415278, 273.8222308413],
    [0.00000005748, 4.36224463614, 30.7756711535],
    [0.0000000647, 3.68405106611, 162.3371875903],
    [0.0000000561, 5.48803250441, 53.93085326429],
    [0.00000005595, 4.94109471314, 2530.8911397693],
    [0.00000006286, 5.65267510028, 432.9923475138],
    [0.00000005905, 0.93770342346, 856.62159297321],
    [0.0000000542, 2.81752688518, 692.831301837],
    [0.00000007291, 4.02822362635, 611.1992808273],
    [0.00000005368, 2.71102841423, 113.89465699899],
    [0.00000006762, 0.70344873462, 421.212934067],
    [0.0000000629, 5.03830033679, 240.36961586451],
    [0.00000006519, 5.71800943425, 1052.02456570489],
    [0.00000005326, 1.23172948855, 258.6319289932],
    [0.00000005918, 2.28750450549, 422.64922266551],
    [0.00000005209, 0.6172903053, 137.2768416459],
    [0.00000005766, 0.0622372912, 272.85902299479],
    [0.00000006291, 3.22636360944, 423.9212470527],
    [0.00000005107, 1.32100485887, 255.1874106971],
    [0.00000006557, 4.83743644153, 100.1551979644],
    [0.00000005736, 0.67024965264, 252.8997888367],
    [0.00000005147, 5.92682066634, 489.0934339546],
    [0.00000005331, 3.66635509285, 21.0968235189],
    [0.00000005351, 2.70813739263, 342.4991822366],
    [0.000000049, 1.21938058089, 533.8669358412],
    [0.00000006324, 2.72039134579, 108.0024581481],
    [0.0000000612, 5.76815989679, 472.4186593982],
    [0.00000004858, 0.64870681722, 29.44876501211],
    [0.00000006153, 4.63786966741, 125.743506415],
    [0.00000004774, 6.1687105894, 394.5986794451],
    [0.00000005096, 0.23957822589, 24.1352049047],
    [0.00000004756, 0.62601572639, 1898.5950354231],
    [0.00000005064, 1.89791339354, 1905.2209474569],
    [0.00000004696, 1.25539391636, 408.19512612779],
    [0.00000005004, 1.63967789274, 650.436044536],
    [0.00000004561, 1.51892035057, 518.8890823142],
    [0.00000005108, 0.06425626484, 1471.9968445471],
    [0.00000004597, 5.56366740468, 291.5059052265],
    [0.00000004502, 2.24091480636, 167.9662618828],
    [0.00000004559, 0.15524505071, 418.76525351221],
    [0.00000006043, 3.1956978721, 405.0137323901],
    [0.00000005079, 4.36470318246, 264.7486382527],
    [0.00000005333, 4.20549686107, 486.64575339981],
    [0.0000000544, 0.4933816322, 230.2176874779],
    [0.00000005845, 2.31588446643, 551.27542358051],
    [0.00000005448, 6.26836971962, 2324.70559133209],
    [0.00000005131, 1.84143196789, 835.28095197081],
    [0.00000004374, 5.36910049865, 138.2736793872],
    [0.00000004471, 5.57996257341, 361.62163734781],
    [0.0000000441, 2.60807357538, 1140.8902459219],
    [0.00000004114, 5.22568875373, 1486.2239385487],
    [0.00000004269, 1.03216096696, 225.3223263683],
    [0.00000004269, 3.85746519963, 201.7634994747],
    [0.00000004076, 1.53556314147, 33.6964324603],
    [0.00000004308, 2.02359582943, 430.2865266556],
    [0.00000004392, 2.70517815683, 492.06237937121],
    [0.00000004365, 1.83148011994, 2840.1694624251],
    [0.00000004469, 4.07802364782, 428.32648106781],
    [0.00000004332, 2.23025483563, 32.48714639791],
    [0.00000004016, 3.79263669972, 425.35753565121],
    [0.00000004203, 0.85003521966, 364.5905827644],
    [0.00000003902, 1.18177774441, 397.63706083091],
    [0.00000003955, 2.6969197336, 850.25880549781],
    [0.00000003945, 1.42294084476, 2413.5712715491],
    [0.00000004359, 4.53204115879, 312.9666584354],
    [0.00000005325, 4.80642075418, 1169.34443392509],
    [0.00000004743, 6.22141011646, 1055.6935944096],
    [0.00000005334, 0.52549183195, 2427.7983655507],
    [0.00000003914, 0.63614657379, 504.8050006645],
    [0.0000000374, 3.31636767466, 658.30035106221],
    [0.00000004015, 3.14423865348, 526.2657538734],
    [0.00000003733, 2.78876823876, 174.9222423167],
    [0.00000003719, 5.55031494411, 292.2566647519],
    [0.00000004998, 6.14565474272, 448.9334088873],
    [0.00000003941, 5.91209030576, 434.0037394701],
    [0.00000003629, 4.5924776217, 1692.40948698591],
    [0.00000004488, 0.55981749277, 410.1672338031],
    [0.00000004487, 0.40749830647, 832.0995582331],
    [0.00000004724, 5.59694447702, 205.90810105891],
    [0.00000003566, 4.66247460443, 215.2398339509],
    [0.00000003566, 0.22715156216, 211.8459918921],
    [0.00000004241, 2.24120341965, 370.2196570569],
    [0.0000000374, 4.78584287004, 471.9310244312],
    [0.00000003762, 4.69658599509, 320.0802054362],
    [0.00000004157, 5.3176710028, 2119.00767786191],
    [0.00000003518, 4.97655806515, 33.3809182752],
    [0.00000003584, 4.2209190426, 77.9943614674],
    [0.00000003636, 2.93926204397, 406.23508054],
    [0.00000003529, 2.23289517847, 732.45130231059],
    [0.00000003573, 2.33382239586, 440.5814673941],
    [0.00000004086, 2.51586258437, 2200.2721761111],
    [0.00000004527, 5.5756527628, 221.17772478411],
    [0.00000003974, 1.28299868905, 16.9185920399],
    [0.00000003913, 2.55458853045, 189.96703968541],
    [0.00000003397, 6.02142949721, 245.2986068689],
    [0.00000003967, 3.61115095966, 120.74507944141],
    [0.00000003785, 3.46924321586, 215.1874443242],
    [0.00000003785, 4.56197560432, 211.8983815188],
    [0.00000003713, 0.35483179852, 203.5086046139],
    [0.00000003713, 4.53479436807, 223.5772212291],
    [0.00000003167, 6.20784254152, 224.8492456163],
    [0.00000003167, 4.96496893225, 202.2365802267],
    [0.00000004027, 0.71647686755, 38.3768531213],
    [0.00000003454, 2.49806053768, 542.78046973539],
    [0.000000037, 3.3249635262, 170.2538837432],
    [0.00000003257, 4.72035017193, 305.85311143459],
    [0.00000003858, 2.88746700144, 135.5799206165],
    [0.00000003174, 4.87604536178, 340.52707456129],
    [0.00000003287, 2.89671334193, 10.051123255],
    [0.00000004371, 5.86032930399, 1045.3986536711],
    [0.0000000322, 5.02019963681, 629.846163059],
    [0.00000003146, 1.41712289631, 553.82616999929],
    [0.00000003544, 4.11156199752, 1066.2516597065],
    [0.00000004149, 1.28803789298, 136.78920667889],
    [0.00000004004, 0.98922990708, 494.510059926],
    [0.00000003653, 5.78563978576, 466.1988842747],
    [0.00000003162, 1.73694976405, 2221.6128171135],
    [0.00000003678, 6.16970207201, 418.2439886504],
    [0.00000003135, 0.41052536886, 409.4335206202],
    [0.00000003067, 0.89802837117, 441.8198618865],
    [0.0000000297, 0.88262512852, 731.70054278519],
    [0.00000003379, 5.48131520562, 237.11878615761],
    [0.000000031, 4.13659867927, 407.1982883865],
    [0.00000003007, 5.96327513578, 92.55401599659],
    [0.00000002898, 0.50716798363, 1080.9663886751],
    [0.0000000317, 2.60807868236, 105.76971804189],
    [0.00000002943, 2.73197794646, 256.08118257441],
    [0.00000003935, 2.13947573521, 426.0912488341],
    [0.00000003326, 3.23767790075, 73.5409433425],
    [0.00000002837, 0.6733283499, 467.9988711681],
    [0.00000003336, 4.84176894704, 128.6093859676],
    [0.00000002896, 5.30062724864, 1802.6158082053],
    [0.00000002904, 1.93203325818, 6062.4193900691],
    [0.00000002774, 4.62553014647, 2847.28300942589],
    [0.00000002813, 4.26879116291, 84.6897094704],
    [0.00000003318, 3.4342028139, 254.6997757301],
    [0.0000000285, 3.81973806384, 220.7683345069],
    [0.0000000301, 1.90486519028, 451.2210307477],
    [0.00000003559, 3.43419228516, 519.15220687259],
    [0.00000003563, 4.32049365009, 486.1581184328],
    [0.0000000336, 1.00268679132, 388.70897272171],
    [0.00000002703, 2.10025220587, 345.08987514331],
    [0.00000002882, 1.86112467769, 511.2879003464],
    [0.00000003267, 3.52339290743, 543.2681047024],
    [0.00000003197, 0.64634843072, 54.89406111079],
    [0.00000002907, 5.13145128922, 630.5798762419],
    [0.00000002669, 0.66381570062, 815.3071635977],
    [0.00000002869, 1.65073434579, 57.86300652739],
    [0.00000002764, 4.2439304532, 5635.8211991931],
    [0.0000000261, 3.974738774, 857.3723524986],
    [0.00000002782, 4.81585990964, 639.177895951],
    [0.00000002826, 6.22897484893, 171.0046432686],
    [0.00000002568, 0.75661707085, 3053.46855786309],
    [0.00000002628, 3.32798868887, 9992.62908628869],
    [0.00000003266, 2.8544903604, 721.40560204669],
    [0.00000002545, 2.52803626535, 455.29619636271],
    [0.0000000251, 2.32307245332, 641.104311644],
    [0.00000002554, 0.62682090398, 738.814089786],
    [0.0000000292, 0.79071794025, 92.2908914382],
    [0.00000002992, 2.81016019301, 462.2667310116],
    [0.00000002474, 0.42468666289, 2214.98690507971],
    [0.00000002474, 6.21322173241, 419.77664546851],
    [0.00000002645, 1.775736345, 1685.2959399851],
    [0.00000002597, 5.06662259586, 426.7301337749],
    [0.00000002936, 1.55290898601, 468.4865061351],
    [0.00000002535, 1.76770621435, 739.5648493114],
    [0.00000002575, 5.24718021793, 77.7191748215],
    [0.0000000296, 6.1451142834, 403.26613512341],
    [0.00000002526, 3.85654775, 198.0774244275],
    [0.00000002819, 4.70625558701, 256.8319420998],
    [0.00000002444, 1.68660473943, 420.6916692052],
    [0.00000003165, 4.31988845323, 200.80029162821],
    [0.00000003165, 0.56973771336, 226.28553421481],
    [0.00000002684, 3.90453406833, 540.98048284201],
    [0.00000002447, 1.54641281756, 207.1801254461],
    [0.00000002447, 3.34321334903, 219.9057003969],
    [0.00000002485, 1.31032791644, 2729.96314120569],
    [0.0000000281, 3.17127497271, 297.9888049084],
    [0.00000002343, 5.749157587, 402.4629859713],
    [0.0000000327, 0.24934461993, 714.92270236481],
    [0.00000002983, 4.41716427608, 1485.7363035817],
    [0.00000002301, 0.60801782045, 455.1531840108],
    [0.00000002295, 0.57261157738, 503.1080796351],
    [0.00000002789, 1.93152906917, 269.6776292571],
    [0.00000002298, 5.64615902769, 131.16013238639],
    [0.00000002626, 1.156581221, 112.8978192577],
    [0.00000002273, 1.03898072401, 283.9047232587],
    [0.00000002621, 0.252889635, 172.48911597691],
    [0.00000002285, 1.78001375993, 525.514994348],
    [0.00000002204, 5.58242761895, 593.67068088151],
    [0.00000002636, 5.01267010764, 649.7023313531],
    [0.00000002222, 4.49823618185, 478.0477336907],
    [0.00000002308, 2.39654845081, 1457.2821155785],
    [0.00000002203, 0.85780087675, 1596.43025976811],
    [0.00000002182, 2.92076786246, 397.14942586389],
    [0.00000002502, 2.3173291283, 9.3174100721],
    [0.00000002138, 0.86464264578, 2310.4784973305],
    [0.00000002142, 6.08094047039, 211.5708052462],
    [0.00000002974, 3.80319784161, 927.5911504839],
    [0.00000002136, 5.80815709862, 186.4555775476],
    [0.00000002091, 1.21183260525, 1258.6977491091],
    [0.00000002094, 5.65475833423, 5.1728084879],
    [0.0000000246, 3.65244152992, 5650.0482931947],
    [0.00000002461, 3.88615671076, 1382.64352936309],
    [0.00000002355, 3.98963199001, 184.3379653929],
    [0.00000002153, 3.87784179007, 233.1866328945],
    [0.00000002597, 3.47646509433, 426.9538829441],
    [0.00000002604, 3.6334692016, 980.91199584231],
    [0.00000002201, 1.12610213271, 434.91876320681],
    [0.00000002162, 2.94323512572, 1383.13116433011],
    [0.00000002404, 5.08590694221, 9580.2579894143],
    [0.0000000226, 2.54048343101, 42.78208713641],
    [0.00000002151, 4.51443750777, 487.60896124631],
    [0.00000002123, 3.56256762785, 149.3193796511],
    [0.00000002556, 0.03670214203, 142.20583265029],
    [0.00000001998, 0.96762571552, 724.5869957844],
    [0.00000001973, 0.95972917687, 481.01667910731],
    [0.00000001973, 4.56679821042, 348.8790160545],
    [0.00000001957, 5.22293191768, 28.5549931348],
    [0.00000001957, 5.22293191768, 28.0673581678],
    [0.00000001991, 3.99171190814, 298.4764398754],
    [0.0000000194, 3.46331308399, 141.46962733991],
    [0.00000002507, 4.0804043748, 6489.5052159121],
    [0.00000002352, 5.76915758065, 479.044571432],
    [0.00000002048, 6.1761281991, 1788.38871420371],
    [0.00000002647, 0.26998970662, 2744.1902352073],
    [0.00000001908, 1.80738955833, 1368.9040703285],
    [0.000000019, 4.64437128047, 271.6497369324],
    [0.00000002178, 1.4779264464, 254.5967098661],
    [0.00000001894, 1.95606297169, 1048.8431719672],
    [0.00000001892, 6.10331223285, 49.26498681829],
    [0.00000001888, 5.69235432976, 642.58878435231],
    [0.00000002182, 2.85682305202, 427.0544566806],
    [0.0000000181, 1.53693276386, 518.40144734719],
    [0.00000001925, 1.50447120099, 3156.5613320817],
    [0.00000002022, 0.93422466156, 4.4220489625],
    [0.00000001793, 1.85965388376, 419.6802772489],
    [0.00000002336, 5.50585235368, 10419.7149121317],
    [0.00000001992, 4.49559449931, 16.4309570729],
    [0.0000000179, 3.03209854172, 71.8440223131],
    [0.00000001779, 0.73335994085, 702.3925293926],
    [0.00000001796, 2.22306233592, 240.6302482954],
    [0.00000001974, 5.12102350165, 640.1892879073],
    [0.00000001881, 4.15581943535, 200.52510498229],
    [0.00000001773, 5.62762637156, 990.47322339791],
    [0.00000002183, 1.90262206941, 411.3765198655],
    [0.0000000225, 5.51794372414, 6077.1341190377],
    [0.00000002182, 5.68626463817, 426.6295600384],
    [0.00000001835, 0.37752300303, 163.1403367424],
    [0.00000002428, 6.11907466746, 2641.0974609887],
    [0.00000001996, 0.31529112752, 398.38782035631],
    [0.00000001813, 5.75219077219, 25.516611749],
    [0.0000000198, 4.51396179003, 206.54124050531],
    [0.0000000194, 4.75992273689, 774.7264474051],
    [0.0000000191, 3.04478377946, 175.6705097146],
    [0.00000002379, 2.00455891511, 594.8945211589],
    [0.00000002068, 5.66121874325, 183.85033042589],
    [0.00000001733, 1.82630536023, 705.36147480921],
    [0.00000001824, 5.14397632587, 420.2497262205],
    [0.00000001804, 5.66197611508, 9566.03089541269],
    [0.00000002037, 2.38364538019, 481.97988695381],
    [0.00000001792, 2.83739260393, 842.65762352999],
    [0.00000001681, 0.9679236632, 1575.08961876571],
    [0.00000001732, 3.12442860953, 692.34366686999],
    [0.00000001698, 0.19286826064, 355.50492808829],
    [0.00000001828, 3.41879771076, 484.9488323704],
    [0.00000001713, 6.0142115106, 457.8614969965],
    [0.00000001808, 4.32289101961, 622.2449810912],
    [0.00000001911, 2.04742119266, 5165.60650620771],
    [0.00000001704, 1.52079559528, 2538.00468677009],
    [0.00000001688, 1.32671223888, 267.22994870229],
    [0.00000001665, 3.80619103257, 1127.50624756031],
    [0.00000002097, 0.65708777051, 10007.3438152573],
    [0.00000001691, 0.50775020289, 789.7043009321],
    [0.00000001699, 5.49155326342, 760.4993534035],
    [0.00000001783, 1.56495333708, 2001.68780964171],
    [0.00000001796, 2.70686770403, 1194.21109128031],
    [0.00000001619, 4.58520070805, 189.47940471839],
    [0.00000001652, 1.38068483464, 152.77596003471],
    [0.00000001707, 1.05909040328, 3046.3550108623],
    [0.00000001924, 5.14976993437, 380.37158544351],
    [0.0000000196, 1.77726603611, 144.1779403256],
    [0.00000001599, 4.42481035386, 2008.8013566425],
    [0.00000001804, 4.83120830404, 353.5448825005],
    [0.00000001586, 1.7747786167, 6069.53293706989],
    [0.00000001644, 5.88078903892, 1112.3159457122],
    [0.00000001572, 6.09540618494, 91.54262404029],
    [0.00000002123, 4.19827720301, 1802.12817323829],
    [0.00000001948, 3.03917076022, 268.68079151581],
    [0.00000001766, 3.3348753509, 3333.7426971825],
    [0.00000001565, 5.51220884907, 97.9199657307],
    [0.00000001602, 0.01982170402, 490.09027169589],
    [0.00000001546, 0.85174846193, 258.78949556011],
    [0.00000001724, 1.53656554024, 26081.03341205689],
    [0.00000001531, 5.96236809333, 5216.33655531789],
    [0.00000001619, 0.30775874593, 784.28767496071],
    [0.00000001871, 5.11950364986, 206.3174913361],
    [0.00000001734, 1.77549936222, 304.84171947829],
    [0.00000001732, 4.43552932727, 1332.728588151],
    [0.00000001517, 0.5397917638, 1048.0924124418],
    [0.00000001563, 1.89447201338, 555.7982776746],
    [0.0000000152, 1.78410202569, 1101.2702454483],
    [0.00000001687, 2.79477418739, 3347.96979118411],
    [0.00000001488, 3.24222987427, 9999.7426332895],
    [0.00000001587, 1.78380089017, 372.77040347569],
    [0.00000001662, 0.99874837499, 26095.2605060585],
    [0.00000001724, 2.90245872652, 1037.7974717033],
    [0.00000001477, 5.93132218114, 208.3894115085],
    [0.00000001657, 0.26785782921, 552.829332258],
    [0.0000000152, 1.16831624482, 2318.0796792983],
    [0.00000001443, 0.41860834829, 910.0625505381],
    [0.00000001446, 5.81588894214, 204.9448932124],
    [0.00000001446, 5.35692253163, 222.14093263061],
    [0.0000000185, 2.2216323477, 699.94484883781],
    [0.00000001439, 3.09801371747, 393.70490756781],
    [0.00000001452, 4.70036751558, 1130.47519297691],
    [0.00000001874, 0.77033226307, 770.0605809591],
    [0.00000001782, 3.11527131409, 835.5440765292],
    [0.00000001639, 3.50228669347, 427.10264079041],
    [0.00000001565, 5.31653543667, 392.9017584157],
    [0.00000001395, 1.10262291095, 9146.54625153749],
    [0.00000001516, 5.15088806631, 397.9001853893],
    [0.00000001684, 4.67559134043, 1479.11039154791],
    [0.00000001659, 0.02097122599, 721.8932370137],
    [0.00000001514, 1.20406313416, 319.06881347989],
    [0.00000001397, 4.55303867764, 3163.6748790825],
    [0.00000001747, 3.84736035069, 37.88921815429],
    [0.00000001492, 1.47452203681, 263.9454891006],
    [0.00000001354, 3.00416254799, 140.2457870625],
    [0.00000001506, 4.98643529599, 251.4153161284],
    [0.00000001365, 3.12436033337, 694.31577454531],
    [0.00000001352, 2.91854326993, 60.79832204921],
    [0.00000001352, 6.06013592352, 60.3106870822],
    [0.00000001531, 5.36116451799, 907.0936051215],
    [0.00000001783, 5.53040699939, 185.08872491831],
    [0.0000000155, 5.62135435218, 170.51700830159],
    [0.00000001524, 4.86473762888, 921.3206991231],
    [0.00000001541, 1.16911147253, 31.73638687251],
    [0.00000001578, 4.41469563792, 190.6483632416],
    [0.00000001578, 3.61652318226, 236.4374626014],
    [0.00000001732, 5.35974909247, 1126.54303971381],
    [0.0000000154, 1.93459248812, 2833.0559154243],
    [0.00000001323, 3.30443135672, 460.7822583033],
    [0.00000001312, 0.39355615225, 448.98829064149],
    [0.00000001724, 0.67798398516, 78.4699343469],
    [0.00000001472, 2.6925994302, 34.1840674273],
    [0.00000001296, 4.05050226429, 2325.1932262991],
    [0.00000001309, 3.88442947901, 349.0914643756],
    [0.00000001818, 5.73491115213, 100.4012761803],
    [0.0000000129, 0.79333495865, 1176.9456158929],
    [0.00000001334, 0.87141749832, 282.9078855174],
    [0.00000001287, 4.97743606169, 286.8400387805],
    [0.00000001392, 0.16591257376, 69.12115511239],
    [0.00000001515, 5.19152100527, 12.28635548869],
    [0.00000001247, 3.07584535023, 187.67941782501],
    [0.00000001247, 4.95537346995, 239.40640801801],
    [0.00000001246, 3.36618810796, 2487.1722274643],
    [0.00000001511, 3.23694999728, 213.00709384469],
    [0.00000001479, 2.258828515, 2516.66404576769],
    [0.00000001233, 0.08035255767, 2531.3787747363],
    [0.00000001632, 1.33635309255, 906.130397275],
    [0.00000001387, 5.264343721, 401.569214094],
    [0.00000001352, 2.20381387735, 351.5727748252],
    [0.00000001313, 1.70932562812, 350.08830211689],
    [0.00000001236, 4.96962008251, 11926.01059618529],
    [0.00000001227, 3.6729584475, 4127.5652170209],
    [0.00000001304, 1.86059485849, 203.49405039889],
    [0.00000001478, 0.09633488682, 264.2610032857],
    [0.00000001254, 1.48175809016, 827.67977000299],
    [0.0000000123, 4.01695958431, 51535.66517935089],
    [0.00000001385, 2.69048880279, 41.2976144281],
    [0.00000001364, 2.61505122332, 65.46418849521],
    [0.00000001395, 4.21766601261, 629.35852809199],
    [0.00000001284, 3.80036081443, 168.2963302829],
    [0.00000001435, 1.13143123004, 617.5620683027],
    [0.00000001411, 4.31607548596, 188.270118656],
    [0.00000001191, 2.27480359368, 606.5163680388],
    [0.00000001193, 0.20887653741, 274.30986580831],
    [0.00000001197, 0.48263618413, 1062.80714141041],
    [0.00000001356, 5.9355527706, 50.6463936626],
    [0.00000001356, 5.9355527706, 50.15875869559],
    [0.00000001276, 1.88008049503, 2090.06585489169],
    [0.00000001195, 4.43032838826, 681.2979666061],
    [0.00000001603, 3.21307189614, 1560.3748897971],
    [0.00000001191, 5.25663119995, 9594.99527173989],
    [0.00000001168, 2.65329470104, 74.3947687319],
    [0.00000001165, 6.24881770348, 674.1844196053],
    [0.00000001242, 4.06152745485, 1902.5271886862],
    [0.0000000133, 4.76147886793, 200.27902676641],
    [0.0000000133, 0.12814729866, 226.80679907661],
    [0.00000001154, 6.03705716215, 2847.77064439291],
    [0.0000000115, 4.06754550587, 17.6523052228],
    [0.00000001152, 0.3559100031, 740.0524842784],
    [0.00000001247, 0.4254459365, 348.3913810875],
    [0.00000001387, 4.1680616919, 527.4871020233],
    [0.0000000125, 3.55179969067, 184.6010899513],
    [0.00000001328, 6.06882136981, 2957.48933064529],
    [0.00000001587, 3.53266665825, 1243.98302014049],
    [0.00000001176, 0.23513424404, 747.1660312792],
    [0.00000001223, 2.16572700191, 1773.6739852351],
    [0.00000001161, 4.72637850213, 2435.3995475185],
    [0.0000000157, 6.26965505442, 3060.5821048639],
    [0.00000001303, 5.05352053957, 393.2172726008],
    [0.00000001126, 2.32401124803, 305.10235190919],
    [0.00000001534, 0.30457466054, 81.9959506997],
    [0.00000001117, 3.04466574791, 526.00262931501],
    [0.00000001307, 1.13548842988, 72.090100529],
    [0.00000001114, 1.57760085679, 25234.46294233869],
    [0.00000001118, 6.05531697707, 511.7755353134],
    [0.00000001242, 4.54338222029, 145.387226388],
    [0.00000001397, 5.87612999192, 336.5949212982],
    [0.00000001401, 3.85597938492, 2118.5200428949],
    [0.00000001139, 0.30433035611, 1055.2059594426],
    [0.00000001096, 2.35952205044, 739.30172475301],
    [0.00000001092, 3.29113609259, 234.3959189569],
    [0.00000001197, 5.42029486787, 306.34074640161],
    [0.00000001126, 1.19478791991, 1144.0716396596],
    [0.00000001351, 1.46891070255, 179.6026629777],
    [0.00000001165, 1.70894571639, 746.67839631219],
    [0.00000001167, 2.75083276977, 634.7244778261],
    [0.00000001121, 2.13313396073, 366.2875037938],
    [0.00000001051, 4.34157702192, 383.81610373959],
    [0.00000001053, 1.84848967894, 2107.96197759801],
    [0.00000001051, 1.42831004195, 10000.23026825651],
    [0.00000001288, 0.28913908894, 247.4831628653],
    [0.00000001045, 0.06510625472, 1680.87615175499],
    [0.0000000107, 1.11790351462, 3472.9532017383],
    [0.00000001043, 3.53177329067, 151.5039356475],
    [0.00000001033, 0.02365635747, 6070.0205720369],
    [0.00000001282, 2.02033530101, 141.9427080919],
    [0.00000001167, 1.05359353693, 2920.8839653411],
    [0.000000011, 0.95076161618, 2634.47154895491],
    [0.00000001035, 0.59532463011, 3369.8604275197],
    [0.00000001091, 5.26065063725, 1314.5693408863],
    [0.00000001274, 1.81279771107, 691.3468291287],
    [0.00000001079, 2.63111319426, 1044.6478941457],
    [0.00000001085, 0.65660514905, 141.208994909],
    [0.00000001245, 1.12530476318, 179.9181771628],
    [0.00000001146, 5.05013070926, 220.54458533771],
    [0.00000001196, 1.60077277494, 1460.2003847578],
    [0.00000001136, 3.62545973301, 480.00777927849],
    [0.00000001119, 3.84274502894, 1534.9819833251],
    [0.00000001056, 5.19951356169, 437.40007365639],
    [0.00000001032, 0.75596269901, 184.97110483931],
    [0.00000001032, 0.99207081399, 242.11472100371],
    [0.00000001039, 3.89912009234, 1791.0824729744],
    [0.00000001061, 4.07694835092, 938.63685074779],
    [0.00000001123, 5.53483735553, 25668.17468021549],
    [0.00000001103, 1.14969049707, 210.60759739969],
    [0.00000001015, 5.62555119479, 252.4121538697],
    [0.00000000979, 0.51006487073, 610.44852130189],
    [0.00000000979, 0.51006487073, 610.93615626891],
    [0.00000001043, 5.02488186971, 17.91542978119],
    [0.00000001128, 2.352714368, 398.5308327082],
    [0.00000001035, 4.59247999326, 235.68919520349],
    [0.00000001072, 2.96070791769, 746.15463932291],
    [0.00000001131, 1.80265887785, 5481.9983758643],
    [0.00000000986, 0.57363342277, 192.448350135],
    [0.00000001287, 0.38193481035, 314.1880065853],
    [0.00000000973, 5.42514671691, 561.6904765255],
    [0.00000001298, 2.65454318605, 614.38067456499],
    [0.00000001151, 2.77783863264, 905.64276230799],
    [0.00000001279, 1.17281533398, 322.3678272966],
    [0.00000000963, 1.93346454966, 782.59075393131],
    [0.00000001064, 1.04722734848, 1372.3485886246],
    [0.00000000973, 1.95209864065, 24.6228398717],
    [0.00000001096, 3.49856994945, 731.92754532131],
    [0.0000000108, 1.5674197016, 2906.6568713395],
    [0.000000012, 3.88182273784, 195.6467902152],
    [0.00000000993, 0.38449878066, 6062.9070250361],
    [0.00000001039, 2.64505699779, 1159.0494931866],
    [0.00000000952, 3.87253065022, 239.8819808975],
    [0.00000001181, 2.55455580038, 1468.3278158424],
    [0.00000001137, 1.16274372128, 2.69149803831],
    [0.00000000941, 2.8065227609, 124.18959773749],
    [0.00000000942, 1.93049464908, 115.11600514891],
    [0.0000000102, 3.36648319866, 196.3805033981],
    [0.00000001065, 3.10915621431, 494.2348732801],
    [0.00000000945, 5.9623658349, 121.0082039998],
    [0.00000000941, 2.10164527812, 120.01136625851],
    [0.00000000996, 1.4978702148, 4863.4417305527],
    [0.00000001059, 6.04847231304, 25653.94758621389],
    [0.00000000936, 5.92819887567, 307.07445958451],
    [0.00000000986, 3.52637633155, 5842.0067476303],
    [0.00000001061, 2.35701423791, 418.97770183331],
    [0.00000000941, 0.81063561753, 97.17169833279],
    [0.00000001049, 5.16810544385, 416.79314583689],
    [0.00000000956, 3.96361938951, 141.4550731249],
    [0.00000000922, 0.2613395805, 1364.4842820984],
    [0.0000000109, 2.75394419028, 1151.93594618579],
    [0.00000000945, 3.91497884985, 220.8689082434],
    [0.00000000945, 0.97464731674, 206.2169175996],
    [0.00000000906, 0.44130467758, 12779.6946129043],
    [0.00000000913, 4.497327446, 285.61619850311],
    [0.00000000993, 1.57797933233, 73.0533083755],
    [0.00000000923, 2.38369657059, 1048.58004740881],
    [0.0000000091, 1.34865027178, 1250.83344258291],
    [0.00000001055, 4.53650215705, 287.6938641699],
    [0.00000000891, 3.38916042044, 4443.9570866775],
    [0.0000000089, 1.87781413537, 952.3401877601],
    [0.00000001011, 2.41002467914, 138.9043267061],
    [0.00000000943, 4.45248854943, 1368.4164353615],
    [0.0000000124, 1.39562373377, 105.7842722569],
    [0.0000000124, 4.53721638736, 105.2966372899],
    [0.00000000975, 6.14076145568, 700.90805668431],
    [0.00000000963, 1.26904248346, 5378.90560164571],
    [0.00000001131, 1.9212770623, 640.0929196877],
    [0.00000001014, 2.27419938832, 246.68001371321],
    [0.00000000922, 4.94986707425, 9772.21644384989],
    [0.00000000896, 2.9532743658, 1571.1574655026],
    [0.00000001121, 0.63121659144, 6467.68194047809],
    [0.00000000872, 1.30941661635, 519.63984183961],
    [0.00000001164, 4.79404702362, 739.0410923221],
    [0.0000000109, 3.70049172953, 1699.0353990197],
    [0.0000000118, 4.01443566672, 636.47207509279],
    [0.00000000912, 2.54546205453, 31.2633061205],
    [0.00000000892, 2.36351221746, 212.579705075],
    [0.00000000892, 5.50510487105, 212.092070108],
    [0.00000000985, 3.52323843583, 988.0255428431],
    [0.0000000086, 2.94846758267, 1585.38455950421],
    [0.0000000099, 1.67825090661, 3149.44778508089],
    [0.00000001177, 4.87572778682, 1328.79643488791],
    [0.00000000864, 2.80999692865, 12146.42323862409],
    [0.00000001007, 3.83948575721, 685.2301198692],
    [0.00000001007, 3.83948575721, 685.7177548362],
    [0.00000000853, 3.93116170567, 2641.5850959557],
    [0.00000000993, 1.01758536916, 2111.8941308611],
    [0.00000000844, 3.42851532207, 1239.78774231901],
    [0.00000000846, 1.60469270371, 2115.0755245988],
    [0.00000000964, 1.18238037517, 756.56720014041],
    [0.00000000981, 6.17353804084, 1471.2460850217],
    [0.00000001164, 4.46546430995, 3391.68870348911],
    [0.00000000885, 1.6438870907, 609.1216151605],
    [0.00000000821, 2.00294213618, 388.2213377547],
    [0.00000000906, 3.95724484289, 327.19375243699],
    [0.00000000903, 1.46965018009, 477.2445845386],
    [0.00000000841, 2.31779507594, 473.31243127551],
    [0.00000000904, 5.47014409814, 635.4752373515],
    [0.00000000822, 1.66432337141, 1365.23504162379],
    [0.00000000997, 1.82079729948, 123.2958258602],
    [0.00000000879, 0.83289385422, 3362.74688051889],
    [0.00000000846, 0.41970975707, 227.81819103291],
    [0.00000000846, 4.46991640952, 199.26763481011],
    [0.00000000947, 0.09177854194, 222.6165055101],
    [0.00000000875, 1.91606789801, 9993.1167212557],
    [0.00000001117, 5.40582369615, 319.0833676949],
    [0.000000008, 1.12338267507, 834.7933170038],
    [0.00000000839, 4.44054896906, 206.64181424181],
    [0.00000000839, 0.44907719753, 220.44401160121],
    [0.00000000838, 1.69845530894, 2442.5130945193],
    [0.0000000083, 0.99305838433, 1891.4814884223],
    [0.00000000841, 6.22199463081, 60.04756252381],
    [0.00000000826, 2.10402662108, 220.1351950605],
    [0.00000000854, 5.92854026664, 540.2297233166],
    [0.00000000842, 1.12102777557, 2854.3965564267],
    [0.00000000858, 4.12461672205, 781.8399944059],
    [0.0000000086, 4.20709137726, 5436.7491977567],
    [0.00000000785, 4.19221284065, 3494.2938427407],
];

const Y2: &[Term] = &[
    [0.0086272193, 0.87622130189, 213.5429129215],
    [0.00611630287, 0.71399818143, 0.2438174835],
    [0.00561413805, 5.96728319816, 206.42936592071],
    [0.0054727137, 2.04588665465, 220.6564599223],
    [0.00234984093, 0.87581308687, 426.8420083595],
    [0.00088108317, 3.29758949735, 7.3573644843],
    [0.00050142527, 1.12650721735, 433.9555553603],
    [0.00045054746, 5.06577813923, 419.72846135871],
    [0.00033335009, 0.01047584776, 640.1411037975],
    [0.00027185514, 1.92525242054, 227.77000692311],
    [0.00018651786, 1.59992516931, 213.0552779545],
    [0.00012946617, 6.11930195692, 199.3158189199],
    [0.00010383025, 3.18830710215, 14.47091148511],
    [0.00006684574, 4.0962007995, 110.45013870291],
    [0.00004661903, 0.26368341105, 647.25465079831],
    [0.00004933834, 1.51097568839, 216.72430665921],
    [0.00004778577, 0.24213059962, 210.36151918381],
    [0.00004377928, 3.6694615593, 316.6356871401],
    [0.00003532396, 5.48934411728, 853.4401992355],
    [0.00002688895, 1.58317658973, 209.6107596584],
    [0.00002540548, 1.07874150891, 441.06910236111],
    [0.00002540549, 0.15899514683, 217.4750661846],
    [0.00002506252, 3.11588688157, 117.5636857037],
    [0.00002582753, 0.02782240807, 103.3365917021],
    [0.00002111683, 4.98775349171, 633.0275567967],
    [0.00002306046, 5.24765858946, 205.9417309537],
    [0.00001843706, 2.39971312535, 323.74923414091],
    [0.00001272298, 4.96900516981, 412.6149143579],
    [0.00000940336, 2.42501300855, 6.86972951729],
    [0.0000080498, 1.7859018949, 234.8835539239],
    [0.00000698973, 0.77208908956, 95.7354097343],
    [0.0000065301, 5.01381847221, 198.82818395289],
    [0.00000766827, 5.79919197548, 202.4972126576],
    [0.00000662176, 0.42004956009, 426.3543733925],
    [0.00000565841, 1.5541989049, 220.16882495529],
    [0.00000765788, 2.28516505694, 224.5886131854],
    [0.00000672412, 5.85676090936, 309.5221401393],
    [0.00000490992, 0.10668768793, 109.9625037359],
    [0.00000440264, 2.02435630765, 330.8627811417],
    [0.00000426768, 5.42227433044, 11.2895177474],
    [0.00000427613, 5.71584342304, 860.55374623631],
    [0.00000505832, 5.83465733982, 309.0345051723],
    [0.00000559499, 5.12833446634, 102.84895673509],
    [0.00000439569, 3.04587045996, 21.5844584859],
    [0.00000404335, 1.38184466479, 223.83785366],
    [0.00000400108, 0.64688754335, 430.02340209721],
    [0.00000338086, 4.72348149737, 1066.7392946735],
    [0.00000310691, 2.86856110459, 3.42521122121],
    [0.0000035634, 0.50093637409, 422.9098550964],
    [0.00000268315, 0.90238113501, 88.6218627335],
    [0.00000265067, 5.80890278675, 423.66061462181],
    [0.00000249792, 2.21289242997, 4.1759707466],
    [0.00000244377, 0.2470261537, 654.3681977991],
    [0.0000030565, 4.7478952219, 419.2408263917],
    [0.0000026349, 1.7571978115, 124.6772327045],
    [0.00000243362, 0.01260786807, 96.2230447013],
    [0.00000228016, 4.72661469203, 522.3336006103],
    [0.00000208205, 0.02609578112, 192.2022719191],
    [0.00000262941, 2.24919351561, 522.8212355773],
    [0.00000217559, 3.69816995653, 412.12727939089],
    [0.00000204218, 0.74740242459, 149.8070146181],
    [0.00000207097, 0.47214424781, 625.9140097959],
    [0.00000226266, 0.43162189178, 203.247972183],
    [0.00000164818, 1.21105459258, 537.0483295789],
    [0.00000154166, 0.52313104707, 302.40859313851],
    [0.00000159821, 3.57691788014, 529.9347825781],
    [0.00000127987, 4.67133129306, 515.2200536095],
    [0.00000150521, 5.90883755804, 301.9209581715],
    [0.00000109809, 0.87108590696, 277.2788112249],
    [0.00000107126, 2.60669435864, 10.538758222],
    [0.00000125246, 1.70701686068, 437.8877086234],
    [0.00000119913, 5.60277656541, 625.42637482889],
    [0.0000009587, 2.1261618305, 13.9832765181],
    [0.00000093192, 0.34445551196, 430.7741616226],
    [0.00000082653, 0.98307709174, 448.1826493619],
    [0.00000080395, 3.02174862119, 231.70216018621],
    [0.00000086059, 5.7830821452, 742.74624304909],
    [0.00000078439, 2.37542883243, 415.7963080956],
    [0.00000095719, 5.10971036152, 846.3266522347],
    [0.00000069822, 4.50382031149, 838.72547026689],
    [0.00000088159, 3.12349955672, 743.23387801611],
    [0.00000062703, 3.46541693301, 728.5191490475],
    [0.00000061768, 0.31223820367, 3.6883357796],
    [0.00000059007, 2.35866131486, 316.14805217309],
    [0.00000057483, 3.58195443098, 18.40306474821],
    [0.00000068064, 1.33121226452, 736.1203310153],
    [0.00000073156, 4.57295172048, 735.6326960483],
    [0.00000066143, 0.61450499024, 529.44714761109],
    [0.00000046643, 4.3990834473, 831.6119232661],
    [0.00000046381, 1.16571256843, 544.1618765797],
    [0.00000049127, 2.41446662828, 515.70768857651],
    [0.00000045075, 2.04400929715, 195.38366565681],
    [0.00000045874, 4.71561784201, 408.68276109481],
    [0.00000039597, 4.9014900027, 1073.85284167431],
    [0.00000037898, 3.62258524288, 1059.6257476727],
    [0.00000044466, 5.29067071105, 941.8182444855],
    [0.00000034788, 6.24281796552, 363.1061100561],
    [0.00000032598, 0.67708460723, 433.46792039329],
    [0.00000033292, 5.12527889351, 191.7146369521],
    [0.00000041206, 5.63757151016, 618.3128278281],
    [0.00000032714, 5.53677499538, 1059.1381127057],
    [0.00000041218, 5.90724265736, 636.2089505344],
    [0.00000036847, 4.86141709685, 223.1041404771],
    [0.00000028979, 2.88486726124, 113.6315324406],
    [0.00000030445, 1.28493169701, 56.3785338191],
    [0.00000038514, 0.59603887895, 86.07111631471],
    [0.00000033922, 0.59559025853, 437.136949098],
    [0.0000002974, 3.7616681067, 270.1652642241],
    [0.00000034418, 6.09770226922, 643.32249753521],
    [0.0000003192, 1.14730009415, 337.9763281425],
    [0.00000035309, 3.07697728911, 203.9816853659],
    [0.00000026923, 1.15025307434, 131.79077970531],
    [0.00000026272, 0.57392625326, 750.3474250169],
    [0.0000002594, 0.39280055678, 76.50988875911],
    [0.00000029423, 3.94515878782, 1280.0383901115],
    [0.00000026782, 4.26801091908, 1155.1173399235],
    [0.00000024375, 1.0593338175, 81.50831573269],
    [0.00000025294, 3.01418609936, 483.4643596621],
    [0.00000023209, 5.71293607821, 867.6672932371],
    [0.00000022169, 5.57360559022, 288.32451148881],
    [0.00000023117, 1.43000944484, 227.2823719561],
    [0.0000002135, 2.23904444472, 160.852714882],
    [0.00000022067, 3.22469653238, 1044.9110187041],
    [0.00000022088, 3.66393393785, 70.6056278207],
    [0.00000020601, 0.57364692423, 22.3352180113],
    [0.00000020035, 4.14035560282, 1148.00379292269],
    [0.00000026634, 4.29832630822, 1052.02456570489],
    [0.00000020249, 5.80067112008, 416.547067621],
    [0.00000019318, 5.28106463151, 497.69145366371],
    [0.00000017591, 5.18296940913, 629.0954035336],
    [0.00000018938, 1.44732055781, 107.2687449652],
    [0.00000021595, 4.07617789654, 490.5779066629],
    [0.00000020105, 0.54192980606, 839.2131052339],
    [0.00000021565, 2.45978600148, 956.53297345411],
    [0.00000016938, 1.31185513413, 89.10949770051],
    [0.00000016497, 3.14108050084, 106.5179854398],
    [0.0000002136, 0.36044575923, 845.8390172677],
    [0.00000019384, 5.02948605381, 1258.21011414209],
    [0.00000015417, 1.59544409554, 241.9971009247],
    [0.00000016591, 6.11245153858, 639.6534688305],
    [0.00000016177, 4.47207109523, 344.9468627914],
    [0.00000014854, 5.83097043394, 266.233110961],
    [0.00000019063, 0.50919845943, 201.01273994931],
    [0.00000018723, 1.2292512046, 226.07308589371],
    [0.00000018567, 4.58722431937, 142.6934676173],
    [0.00000014166, 5.14705983766, 632.5399218297],
    [0.00000017119, 5.54902094563, 352.06040979221],
    [0.00000018888, 4.20468772536, 52.446380556],
    [0.00000013506, 2.46884301371, 138.76131435421],
    [0.00000017909, 5.34068384361, 934.70469748469],
    [0.00000013747, 0.539807478, 359.173956793],
    [0.00000014401, 5.13574388998, 405.5013673571],
    [0.00000016878, 1.1888668578, 341.01470952831],
    [0.00000013527, 4.54185459719, 284.39235822571],
    [0.00000013436, 2.93238200114, 6290.4332144757],
    [0.00000012962, 5.56740362933, 181.2995840071],
    [0.00000015865, 1.01845623601, 651.1868040614],
    [0.00000013136, 0.57265499079, 6276.2061204741],
    [0.00000012088, 5.67052895035, 127.22797912329],
    [0.00000012658, 4.99618012837, 948.9317914863],
    [0.00000012303, 2.19066167059, 445.00125562421],
    [0.00000011905, 4.76438580603, 424.39432780471],
    [0.00000012624, 4.35576033147, 10220.6429106953],
    [0.00000012885, 5.28091161489, 1375.52998236229],
    [0.00000012454, 0.80444795613, 295.2950461377],
    [0.00000012341, 1.99603261002, 10206.4158166937],
    [0.00000011182, 0.00456461469, 209.12312469139],
    [0.0000001086, 1.22452077861, 350.5759370839],
    [0.00000010568, 4.31488618104, 12.77399045571],
    [0.00000010726, 4.07799467328, 703.8770021009],
    [0.00000013731, 5.49770812826, 636.95971005981],
    [0.00000011066, 4.06922769849, 1471.50920958009],
    [0.00000010568, 2.45354520533, 245.7862418359],
    [0.00000011834, 4.04162936965, 191.45151239371],
    [0.00000013045, 4.5668328548, 323.2615991739],
    [0.00000012746, 1.52919279431, 729.0067840145],
    [0.00000011214, 0.69012319111, 618.8004627951],
    [0.00000011539, 5.2620421559, 75.0254160508],
    [0.00000012236, 6.03310641164, 294.80741117069],
    [0.00000009934, 5.72889650913, 209.87388421679],
    [0.00000010182, 4.02484159335, 235.6343134493],
    [0.00000009148, 3.88097207377, 1464.3956625793],
    [0.00000009436, 4.83010917251, 508.10650660869],
    [0.00000008422, 0.17788593244, 661.4817447999],
    [0.00000008359, 3.00746750344, 1361.3028883607],
    [0.00000008253, 5.57801256284, 565.35950523021],
    [0.00000009478, 0.55087151701, 949.4194264533],
    [0.00000010785, 4.05427228564, 1368.4164353615],
    [0.00000008229, 5.11025535831, 5849.1202946311],
    [0.00000007715, 2.36462770264, 10.8018827804],
    [0.0000000847, 1.44876764278, 1052.51220067191],
    [0.00000007922, 1.18690846899, 5863.3473886327],
    [0.00000007332, 1.23083436431, 404.7506078317],
    [0.00000007694, 0.25064967436, 9779.32999085069],
    [0.00000008936, 4.75203536861, 1574.6019837987],
    [0.00000009236, 0.11752949743, 1162.23088692429],
    [0.00000007408, 2.61049213458, 9793.5570848523],
    [0.00000007006, 5.43604871599, 208.8770464755],
    [0.00000008885, 5.06228722175, 1251.0965671413],
    [0.00000006858, 5.72884043764, 218.2087793675],
    [0.00000006727, 5.2979398006, 313.4542934024],
    [0.00000006237, 0.59505976047, 319.8170808778],
    [0.0000000644, 3.78505540532, 429.28968891431],
    [0.00000008565, 1.73194061326, 6283.3196674749],
    [0.00000007708, 4.22643181375, 621.98185653281],
    [0.00000006384, 4.83193390171, 1265.32366114289],
    [0.00000007986, 3.15525042033, 10213.5293636945],
    [0.00000005697, 4.23986450365, 121.4958389668],
    [0.00000005771, 0.86134691305, 114.38229196601],
    [0.00000005568, 3.42931800801, 194.89603068979],
    [0.00000006666, 5.54479786218, 202.760337216],
    [0.00000006258, 1.84744097041, 117.0760507367],
    [0.00000005194, 4.52702758406, 842.3944989716],
    [0.00000005192, 4.69562106653, 78.9575693139],
    [0.00000006155, 3.58871751165, 196.1344251822],
    [0.00000005311, 1.21158575749, 956.04533848709],
    [0.00000006053, 1.30195529044, 230.9514006608],
    [0.00000006283, 5.50104105259, 63.49208081989],
    [0.0000000555, 5.07411282467, 1691.9218520189],
    [0.00000006169, 3.68737408715, 536.5606946119],
    [0.00000004641, 3.65270609087, 436.4032359151],
    [0.00000004643, 0.07371316206, 9.3174100721],
    [0.00000004944, 3.82470392475, 1787.9010792367],
    [0.00000004821, 0.48227334704, 644.0732570606],
    [0.00000004551, 0.43418901577, 757.4609720177],
    [0.00000004644, 2.92326284592, 9.8050450391],
    [0.00000004204, 5.5141310562, 576.4052054941],
    [0.00000004172, 5.34743985805, 251.6759485593],
    [0.00000004304, 5.72099336768, 289.8089841971],
    [0.00000004123, 2.58679021252, 175.40987728371],
    [0.00000004456, 4.56839890878, 824.4983762653],
    [0.00000005291, 6.15232066316, 1478.62275658089],
    [0.00000004026, 4.45906345257, 710.99054910171],
    [0.0000000528, 5.68255683303, 202.0095776906],
    [0.00000004248, 1.99938037336, 398.38782035631],
    [0.00000003877, 4.60548911797, 98.6561710411],
    [0.00000003948, 3.95821618688, 1589.3167127673],
    [0.00000004047, 3.67831038408, 1780.78753223589],
    [0.00000003924, 2.82058266387, 134.3415261241],
    [0.00000004377, 1.51247705161, 10.051123255],
    [0.00000003858, 4.98661199042, 501.62360692681],
    [0.00000003847, 3.25070592611, 333.9011625275],
    [0.00000005256, 6.27523841381, 5856.23384163189],
    [0.00000005054, 5.98297127509, 479.532206399],
    [0.00000004175, 1.22869956774, 63.9797157869],
    [0.0000000415, 5.64863928594, 106.0303504728],
    [0.0000000376, 2.6880027175, 508.5941415757],
    [0.00000004966, 1.12070430834, 216.2366716922],
    [0.0000000488, 3.70286182159, 1684.80830501809],
    [0.00000004042, 1.45643909331, 120.1144321225],
    [0.00000004914, 1.41648464476, 9786.44353785149],
    [0.00000003672, 5.52203210982, 422.42222012939],
    [0.00000004671, 4.79630546138, 1567.48843679789],
    [0.00000003483, 3.63502959369, 348.1282565291],
    [0.000000037, 4.27862787379, 416.059432654],
    [0.000000043, 4.48648057472, 1890.9938534553],
    [0.00000003599, 2.97275381758, 2.9375762542],
    [0.00000003544, 3.88355984367, 852.9525642685],
    [0.00000003267, 2.77536057636, 1677.6947580173],
    [0.00000003574, 4.37725311704, 156.9205616189],
    [0.00000003416, 0.18832491676, 167.07249000551],
    [0.00000003394, 1.52845073217, 196.2774375341],
    [0.00000003544, 0.55935420202, 114.6429243969],
    [0.00000003999, 1.65622001101, 326.9306278786],
    [0.00000003152, 5.90994469916, 151.2914873264],
    [0.00000003262, 0.99529440929, 1272.4372081437],
    [0.00000003054, 2.50692121176, 749.8597900499],
    [0.0000000335, 3.78153899621, 212.579705075],
    [0.0000000334, 1.11106690501, 214.506120768],
    [0.00000003138, 5.41161067084, 320.5678404032],
    [0.00000003732, 5.759336638, 611.1992808273],
    [0.00000003741, 5.33542182003, 849.5080459724],
    [0.00000003047, 0.21958282546, 230.8083883089],
    [0.00000003048, 1.23176928659, 21.0968235189],
    [0.00000002851, 0.01947979319, 6069.53293706989],
    [0.00000002864, 1.37901080071, 9999.7426332895],
    [0.00000002898, 0.80640653869, 213.4947288117],
    [0.00000002898, 4.08606578636, 213.5910970313],
    [0.00000002819, 4.62496885979, 431.5078748055],
    [0.00000003469, 3.39462934689, 526.7533888404],
    [0.00000003327, 4.72501626019, 1581.7155307995],
    [0.00000002927, 0.75688922418, 395.8225197225],
    [0.00000003762, 5.33741882811, 38.3768531213],
    [0.00000002893, 4.68179275926, 381.5954257209],
    [0.00000003707, 0.28876454398, 215.99059347631],
    [0.00000002804, 1.54781529217, 260.01333583751],
    [0.00000002799, 1.64426930831, 129.6756596781],
    [0.00000003378, 0.03634726419, 299.37021175271],
    [0.00000002783, 4.12159252831, 1287.15193711231],
    [0.00000003526, 4.64846209915, 211.09523236671],
    [0.00000002541, 3.72750148868, 414.31183538731],
    [0.00000002607, 5.40709902081, 276.79117625789],
    [0.00000002465, 5.81538596066, 572.473052231],
    [0.00000002461, 2.38415136907, 409.4335206202],
    [0.00000002462, 0.41590882019, 59.55992755679],
    [0.00000002579, 3.41605150344, 1493.3374855495],
    [0.00000002414, 4.38756196239, 343.4623900831],
    [0.00000002533, 2.34096298657, 696.7634551001],
    [0.0000000239, 0.78788852748, 1588.82907780029],
    [0.00000002433, 1.96229119408, 6070.0205720369],
    [0.00000002747, 5.20221540877, 216.9874312176],
    [0.0000000242, 6.19374294302, 45.3328335552],
    [0.00000002297, 4.18882853069, 99.6675629974],
    [0.00000002813, 4.09700943877, 422.1761419135],
    [0.00000002913, 0.57159915913, 551.27542358051],
    [0.0000000286, 4.18470915906, 69.3963417583],
    [0.00000002387, 2.09096895837, 1169.83206889211],
    [0.00000002258, 1.85441482871, 188.270118656],
    [0.00000002293, 5.87858665828, 98.91680347199],
    [0.00000002711, 5.95954660965, 1795.0146262375],
    [0.00000002337, 3.41538474921, 10000.23026825651],
    [0.00000002777, 0.35017301148, 100.1551979644],
    [0.00000003022, 5.84737063031, 190.9638774267],
    [0.00000002327, 4.00268284025, 143.9027536797],
    [0.00000002152, 3.39690921596, 189.1638905333],
    [0.00000002147, 1.10129984315, 265.745475994],
    [0.00000002162, 3.02953405239, 238.815707187],
    [0.00000002184, 3.41242359251, 917.1760975389],
    [0.00000002297, 4.31295262287, 533.1161763158],
    [0.00000002099, 2.0610050047, 275.7943385166],
    [0.00000002122, 4.75342370868, 93.1846633155],
    [0.00000002068, 2.33266360886, 221.61966776881],
    [0.00000002635, 5.89696027686, 646.76701583129],
    [0.00000002175, 4.05922699845, 432.471082652],
    [0.00000002049, 2.54249741628, 205.46615807421],
    [0.00000002103, 1.50326611692, 554.31380496631],
    [0.00000002036, 5.63434399596, 415.3086731286],
    [0.00000002045, 2.97922154502, 547.2002579655],
    [0.00000001996, 0.02214888903, 5642.93474619389],
    [0.00000002709, 1.33128572135, 174.1860370063],
    [0.00000002499, 5.48814423722, 927.5911504839],
    [0.00000002481, 3.81894500619, 91.8032564712],
    [0.00000002555, 6.20493162777, 196.8681383651],
    [0.00000002555, 4.967879846, 230.2176874779],
    [0.00000002082, 2.24744287595, 832.0995582331],
    [0.00000002231, 3.6209351746, 2097.1794018925],
    [0.00000002095, 4.31580761873, 1140.8902459219],
    [0.0000000192, 6.22028733359, 99.40443843901],
    [0.0000000191, 4.09848069601, 106.7811099982],
    [0.00000002301, 4.90677041319, 2008.3137216755],
    [0.00000002228, 4.84472911427, 219.6932520758],
    [0.00000002219, 0.03409249836, 207.3925737672],
    [0.00000002444, 1.01754308284, 71.09326278771],
    [0.0000000195, 4.34886592902, 417.2807808039],
    [0.00000001941, 1.80523291314, 374.15181032],
    [0.000000019, 4.76624814243, 333.4135275605],
    [0.00000002353, 6.10168291345, 650.436044536],
    [0.00000001819, 1.46865726367, 120.74507944141],
    [0.00000001992, 3.25021395969, 2413.5712715491],
    [0.00000001805, 1.41126788033, 9573.14444241349],
    [0.00000002272, 4.49997759337, 135.5799206165],
    [0.00000001823, 3.75716328579, 425.878800513],
    [0.00000002143, 0.94827482019, 347.6406215621],
    [0.00000001841, 5.18057670314, 220.7046440321],
    [0.00000001834, 5.98123022671, 206.3811818109],
    [0.00000001777, 4.24421513244, 116.18227885939],
    [0.00000002138, 3.72480039128, 2104.2929488933],
    [0.00000001887, 3.3782553974, 556.7614855211],
    [0.0000000239, 5.29068620866, 856.62159297321],
    [0.00000001825, 0.29367232391, 345.08987514331],
    [0.0000000173, 4.70941820611, 237.9219353097],
    [0.00000002103, 4.16707885187, 2207.38572311189],
    [0.00000001779, 1.21791991667, 427.805216206],
    [0.00000001911, 0.45079864675, 145.874861355],
    [0.00000001811, 5.74280960496, 570.98857952271],
    [0.0000000171, 4.07545471254, 423.17297965479],
    [0.00000002261, 1.53982829642, 421.4253823881],
    [0.00000001681, 0.2716441271, 305.85311143459],
    [0.00000002093, 3.09304115315, 1169.34443392509],
    [0.00000002071, 0.57780048368, 942.3058794525],
    [0.00000001691, 0.86915956975, 455.29619636271],
    [0.0000000208, 4.93280502131, 405.0137323901],
    [0.00000001764, 1.22791859864, 186.71620997851],
    [0.00000001662, 3.65838163965, 305.5899868762],
    [0.00000001748, 1.78978347421, 899.0168502742],
    [0.00000001696, 0.02813095646, 85.1773444374],
    [0.00000002142, 3.56494929765, 2001.2001746747],
    [0.00000002282, 0.47292670815, 439.37218133171],
    [0.00000001748, 2.40026034305, 1066.2516597065],
    [0.00000001908, 4.56312338515, 131.6477673534],
    [0.00000001808, 4.08414705157, 1457.2821155785],
    [0.00000001794, 4.25056477507, 913.24394427581],
    [0.00000002167, 4.61051989673, 563.87503252191],
    [0.00000001602, 1.84763847168, 327.68138740401],
    [0.00000001891, 1.79946288763, 1155.6049748905],
    [0.00000002205, 5.85470490114, 388.70897272171],
    [0.00000001597, 4.15810623296, 281.210964488],
    [0.00000001719, 1.15830791285, 312.4429014461],
    [0.00000002158, 2.28726893212, 224.1009782184],
    [0.00000001659, 4.74001893135, 561.4273519671],
    [0.00000001737, 0.17490306013, 167.9662618828],
    [0.00000001501, 0.25666873016, 312.9666584354],
    [0.00000001587, 3.94775538143, 732.45130231059],
    [0.00000001488, 2.7209683974, 12.28635548869],
    [0.0000000146, 2.11177924228, 2627.3580019541],
    [0.00000001835, 2.89416763419, 206.47755003051],
    [0.00000001708, 3.71608804699, 82.13896305161],
    [0.00000001842, 1.98442548678, 220.60827581251],
    [0.00000001895, 3.47648673336, 291.5059052265],
    [0.00000001423, 5.61838953778, 225.3223263683],
    [0.00000001423, 5.55442193599, 201.7634994747],
    [0.00000001568, 4.88514907741, 685.7177548362],
    [0.00000001663, 0.82161037585, 3597.8742519263],
    [0.00000001491, 0.52011503386, 240.36961586451],
    [0.00000001913, 0.07515794396, 295.4380584896],
    [0.00000001496, 1.53621258084, 1045.3986536711],
    [0.00000001477, 0.63538013406, 440.5814673941],
    [0.0000000141, 2.2817438572, 137.2768416459],
    [0.00000001748, 5.19272444741, 519.15220687259],
    [0.00000001325, 1.41732134877, 980.91199584231],
    [0.00000001352, 0.82085755018, 5429.63565075589],
    [0.00000001414, 1.50139243083, 1371.59782909919],
    [0.00000001697, 4.54037425682, 1898.10740045609],
    [0.00000001424, 4.89243708936, 721.40560204669],
    [0.00000001424, 1.75084443577, 721.8932370137],
    [0.00000001295, 0.66380326238, 1905.2209474569],
    [0.00000001272, 4.15261431749, 127.71561409031],
    [0.0000000174, 4.55214034273, 1883.8803064545],
    [0.00000001435, 0.26851729343, 699.94484883781],
    [0.0000000126, 5.67254228493, 850.25880549781],
    [0.00000001316, 2.05653832811, 1382.64352936309],
    [0.00000001303, 2.77196448848, 28.6980054867],
    [0.00000001701, 1.44281649853, 312.70353387701],
    [0.00000001245, 2.2443978633, 9359.84534697549],
    [0.0000000124, 2.86058076462, 1994.08662767389],
    [0.00000001286, 3.69806111108, 1048.8431719672],
    [0.0000000124, 4.7715381832, 148.32254190981],
    [0.00000001365, 0.95560209763, 212.79215339611],
    [0.00000001362, 3.93431918921, 214.2936724469],
    [0.00000001206, 3.84953492409, 739.5648493114],
    [0.00000001503, 5.21115384219, 1243.98302014049],
    [0.00000001305, 1.5724242475, 259.1195639602],
    [0.00000001167, 1.86683877227, 233.1866328945],
    [0.00000001167, 3.02278739432, 193.8991929485],
    [0.00000001155, 0.5239801134, 153.73916788121],
    [0.0000000122, 6.0805821369, 283.9047232587],
    [0.00000001153, 6.21046784748, 525.7419968841],
    [0.00000001188, 2.94352017149, 258.6319289932],
    [0.00000001558, 4.67220714738, 4216.4308972379],
    [0.00000001423, 3.77197308459, 2420.68481854989],
    [0.00000001138, 0.76214399254, 17.91542978119],
    [0.00000001133, 2.84505877314, 841.9068640046],
    [0.00000001109, 1.05776040432, 121.0082039998],
    [0.00000001109, 0.17173305113, 629.846163059],
    [0.00000001434, 3.90656801196, 6062.4193900691],
    [0.00000001122, 2.45857726727, 128.6093859676],
    [0.00000001123, 3.06803578936, 3178.38960805111],
    [0.00000001154, 4.32058575911, 67.91186905],
    [0.0000000113, 5.25611734741, 731.70054278519],
    [0.00000001305, 2.2526224959, 97.11681657861],
    [0.00000001248, 3.82251460637, 2523.7775927685],
    [0.00000001161, 2.2584072315, 81.9959506997],
    [0.00000001178, 0.70097671757, 1056.444353935],
    [0.00000001342, 5.62104702567, 355.99256305531],
    [0.00000001249, 4.92175219077, 526.2657538734],
    [0.00000001034, 4.56345495168, 777.17412795991],
    [0.00000001332, 4.90721267162, 835.5440765292],
    [0.00000001024, 6.03631011372, 5635.8211991931],
    [0.00000001173, 4.16447862889, 74.53778108379],
    [0.00000001173, 3.45615871164, 2317.5920443313],
    [0.00000001012, 2.86472380431, 215.2398339509],
    [0.00000001186, 3.42680148463, 1272.9248431107],
    [0.00000001049, 1.32104580559, 6062.9070250361],
    [0.00000001154, 3.31945570971, 2406.4577245483],
    [0.00000001062, 3.40252606572, 906.130397275],
    [0.00000001124, 0.61967036641, 3914.26612158291],
    [0.00000000993, 1.99202380463, 211.8459918921],
    [0.00000000986, 6.21774784663, 525.514994348],
    [0.00000000986, 5.89248361654, 602.00806815971],
    [0.00000000992, 0.16374858268, 306.34074640161],
    [0.00000001239, 4.40402775047, 2193.1586291103],
    [0.00000001134, 3.08772580443, 2729.96314120569],
    [0.00000001041, 2.53935646805, 945.7503977486],
    [0.00000001025, 3.08133309612, 32.48714639791],
    [0.00000001044, 1.56254364362, 472.4186593982],
    [0.00000001335, 4.80329987516, 2324.70559133209],
    [0.00000001199, 4.40804047285, 4113.3381230193],
    [0.00000001174, 4.67336952922, 1176.9456158929],
    [0.00000001213, 0.28347383353, 252.8997888367],
    [0.00000000973, 1.75775518324, 245.03548231051],
    [0.00000000973, 6.27346363694, 182.05034353251],
    [0.00000001167, 6.08159477667, 635.72131556739],
    [0.00000000936, 3.32125427673, 220.1351950605],
    [0.00000001073, 3.85483987093, 1773.6739852351],
    [0.00000000931, 1.55716679047, 206.9506307825],
    [0.00000000931, 2.65028378733, 1582.2031657665],
    [0.00000001237, 1.19959870124, 2964.60287764609],
    [0.00000001074, 5.00882181931, 738.814089786],
    [0.00000000976, 6.18216851835, 31.9995114309],
    [0.00000000907, 3.58111072001, 1802.6158082053],
    [0.00000000925, 2.76573994536, 3494.7814777077],
    [0.00000000999, 4.06676744721, 171.8984151459],
    [0.00000000931, 4.76188288294, 1037.7974717033],
    [0.00000001094, 3.85667770199, 2516.66404576769],
    [0.00000000949, 3.82779842438, 1809.72935520611],
    [0.00000000964, 2.57800328808, 2641.5850959557],
    [0.00000000947, 5.94253987889, 2111.40649589409],
    [0.00000000898, 1.16267053643, 9566.03089541269],
    [0.00000001029, 3.26133516597, 519.63984183961],
    [0.00000000989, 3.95452500658, 255.1874106971],
    [0.00000001003, 4.46395476902, 60.52313540329],
    [0.00000000886, 0.72851955442, 305.10235190919],
    [0.0000000092, 1.69743225247, 459.0853372739],
    [0.00000000888, 1.37138485948, 3259.6541063003],
    [0.00000000888, 4.51297751307, 3260.1417412673],
    [0.0000000096, 0.18926013762, 84.6897094704],
    [0.00000000881, 0.6360209308, 397.9001853893],
    [0.00000000924, 5.2130117135, 731.92754532131],
    [0.0000000096, 2.83183840474, 5856.7214765989],
    [0.00000000886, 0.13702548516, 471.9310244312],
    [0.00000000909, 1.30383200776, 746.15463932291],
];

const Y3: &[Term] = &[
    [0.00076886822, 1.38647122579, 206.42936592071],
    [0.00075865107, 0.30263761509, 220.6564599223],
    [0.00028377246, 2.294775168, 0.2438174835],
    [0.00011451297, 5.24189857677, 426.8420083595],
    [0.00009043324, 5.61883049962, 433.9555553603],
    [0.0000741953, 0.21033373142, 227.77000692311],
    [0.00008292033, 1.50182614839, 7.3573644843],
    [0.00004421142, 0.64077885911, 419.72846135871],
    [0.00003519324, 1.53956700451, 199.3158189199],
    [0.00003064445, 4.39386454839, 640.1411037975],
    [0.00002363042, 1.46950181949, 14.47091148511],
    [0.00001027777, 4.71705572637, 647.25465079831],
    [0.00000789743, 5.60732845352, 441.06910236111],
    [0.00000810744, 5.98445458539, 216.72430665921],
    [0.00000766386, 2.03195290594, 210.36151918381],
    [0.00000673097, 5.33794721338, 213.0552779545],
    [0.00000506614, 2.17347656423, 213.5429129215],
    [0.00000384956, 1.47307672393, 117.5636857037],
    [0.0000046354, 3.55273822694, 853.4401992355],
    [0.00000411246, 2.1819916663, 110.45013870291],
    [0.00000324142, 0.0785222944, 234.8835539239],
    [0.00000285917, 0.41121094808, 412.6149143579],
    [0.00000238406, 1.75200857251, 103.3365917021],
    [0.00000192441, 5.32707204371, 316.6356871401],
    [0.000001896, 0.69653910652, 6.86972951729],
    [0.0000018961, 0.69106705292, 633.0275567967],
    [0.00000213874, 0.85839521405, 205.9417309537],
    [0.00000153605, 0.70666490608, 323.74923414091],
    [0.00000154083, 1.31044116162, 21.5844584859],
    [0.00000130169, 6.09318414425, 209.6107596584],
    [0.00000121811, 0.47800554959, 198.82818395289],
    [0.00000112652, 6.07737302889, 220.16882495529],
    [0.00000109203, 1.75938966834, 217.4750661846],
    [0.00000111589, 3.84220589954, 860.55374623631],
    [0.00000097336, 2.54240833553, 95.7354097343],
    [0.00000114728, 5.87380874959, 223.83785366],
    [0.00000085497, 0.31664832561, 330.8627811417],
    [0.00000103793, 1.39004326725, 309.5221401393],
    [0.00000085243, 4.74344019433, 654.3681977991],
    [0.00000081972, 1.720882056, 192.2022719191],
    [0.00000093735, 4.66924086636, 426.3543733925],
    [0.00000078232, 6.26955569087, 124.6772327045],
    [0.00000073732, 2.6227420553, 88.6218627335],
    [0.00000068659, 4.66941001827, 109.9625037359],
    [0.00000087657, 5.07624062638, 430.02340209721],
    [0.0000005779, 0.13357560704, 224.5886131854],
    [0.00000050888, 1.523338655, 202.4972126576],
    [0.00000048029, 2.25988634275, 302.40859313851],
    [0.00000057606, 2.26643847681, 203.247972183],
    [0.0000005696, 2.75566102022, 1066.7392946735],
    [0.00000045308, 1.68344191762, 96.2230447013],
    [0.00000048067, 1.37320484001, 309.0345051723],
    [0.00000036732, 5.51470119579, 448.1826493619],
    [0.00000038865, 2.20650641493, 625.9140097959],
    [0.00000043853, 4.9207121602, 422.9098550964],
    [0.0000003668, 0.3811690435, 13.9832765181],
    [0.00000035412, 3.97478676019, 522.8212355773],
    [0.00000030232, 5.44165264045, 412.12727939089],
    [0.00000034292, 1.35598862213, 301.9209581715],
    [0.00000025919, 3.74498868983, 4.1759707466],
    [0.00000026527, 1.95025295633, 423.66061462181],
    [0.00000023623, 0.11328528018, 515.2200536095],
    [0.00000017831, 3.67540680263, 11.2895177474],
    [0.00000017289, 5.6976771955, 537.0483295789],
    [0.00000016881, 3.81249765736, 195.38366565681],
    [0.00000013511, 4.15427151016, 515.70768857651],
    [0.00000012893, 5.83608381063, 437.8877086234],
    [0.00000011197, 4.12727958334, 742.74624304909],
    [0.00000013451, 0.48023955262, 522.3336006103],
    [0.00000010292, 5.57616897093, 337.9763281425],
    [0.00000011481, 0.5590080175, 191.7146369521],
    [0.00000011394, 1.22639782189, 625.42637482889],
    [0.0000001138, 3.01802304028, 1073.85284167431],
    [0.00000009884, 5.68207864841, 131.79077970531],
    [0.00000009268, 2.8567760643, 81.50831573269],
    [0.00000010374, 5.65556228759, 544.1618765797],
    [0.00000011913, 5.03981077547, 437.136949098],
    [0.00000008626, 5.23537891674, 728.5191490475],
    [0.00000008671, 5.89546440948, 419.2408263917],
    [0.00000008821, 6.14734947376, 831.6119232661],
    [0.00000008112, 5.212461684, 149.8070146181],
    [0.00000009768, 1.10645539833, 618.3128278281],
    [0.00000008329, 3.90263564155, 867.6672932371],
    [0.00000007645, 0.8250628421, 846.3266522347],
    [0.00000008659, 4.22366027894, 643.32249753521],
    [0.00000007205, 5.97033515631, 227.2823719561],
    [0.00000007157, 4.065880171, 636.2089505344],
    [0.00000007036, 1.06159700654, 231.70216018621],
    [0.00000007083, 3.27104541387, 89.10949770051],
    [0.00000006556, 1.1005592644, 743.23387801611],
    [0.00000005903, 5.58614673874, 270.1652642241],
    [0.00000006615, 5.2091090629, 433.46792039329],
    [0.00000006469, 0.48331749487, 408.68276109481],
    [0.00000005426, 6.23003978027, 241.9971009247],
    [0.00000005648, 0.98336733799, 529.9347825781],
    [0.00000007105, 1.44824281594, 18.40306474821],
    [0.00000005052, 3.61172453455, 416.547067621],
    [0.00000006189, 3.11325347013, 736.1203310153],
    [0.00000005821, 1.93537322437, 1280.0383901115],
    [0.00000005043, 2.19686528643, 277.2788112249],
    [0.00000004744, 3.03559141046, 56.3785338191],
    [0.00000005705, 3.29935860753, 430.7741616226],
    [0.00000005226, 3.72017940288, 415.7963080956],
    [0.00000005511, 5.16650332361, 529.44714761109],
    [0.0000000452, 3.93668601315, 1059.1381127057],
    [0.00000004583, 1.57866732584, 294.80741117069],
    [0.00000004789, 2.5799141756, 295.2950461377],
    [0.00000004026, 4.75259771651, 483.4643596621],
    [0.00000003728, 4.95619377571, 185.08872491831],
    [0.00000003578, 0.94204754728, 405.5013673571],
    [0.0000000389, 5.00299059027, 750.3474250169],
    [0.00000004291, 0.89282309495, 941.8182444855],
    [0.00000003758, 4.69738792182, 661.4817447999],
    [0.00000003547, 1.97438574685, 70.6056278207],
    [0.00000003641, 2.2393406132, 839.2131052339],
    [0.00000004196, 2.4061083159, 618.8004627951],
    [0.00000003709, 0.25270527416, 508.10650660869],
    [0.00000004193, 0.33797589356, 838.72547026689],
    [0.00000003571, 6.03135821293, 1148.00379292269],
    [0.00000003647, 0.8865940834, 934.70469748469],
    [0.00000002978, 5.00861879701, 1044.9110187041],
    [0.00000002876, 3.7227733631, 398.38782035631],
    [0.00000002643, 3.66740434616, 497.69145366371],
    [0.00000002725, 4.31936427464, 363.1061100561],
    [0.00000003246, 4.14230106799, 639.6534688305],
    [0.00000002721, 5.7164453721, 1464.3956625793],
    [0.00000002917, 0.8128307039, 113.6315324406],
    [0.0000000256, 3.37970059304, 729.0067840145],
    [0.0000000238, 4.67244312905, 86.07111631471],
    [0.00000002667, 1.66091865719, 10.8018827804],
    [0.00000002238, 0.692619908, 10.538758222],
    [0.00000002305, 0.45579083441, 956.53297345411],
    [0.00000002316, 0.44164789425, 3.42521122121],
    [0.00000002282, 1.20272003403, 611.1992808273],
    [0.00000001988, 4.99900390794, 651.1868040614],
    [0.00000002365, 0.61916344902, 2111.40649589409],
    [0.00000002485, 5.89913021216, 316.14805217309],
    [0.0000000267, 5.34319853125, 196.1344251822],
    [0.0000000267, 5.82961294252, 230.9514006608],
    [0.00000001974, 1.72688011717, 1059.6257476727],
    [0.0000000244, 3.86794399442, 106.0303504728],
    [0.00000002032, 3.65372244155, 1375.52998236229],
    [0.00000002151, 6.26903391366, 824.4983762653],
    [0.00000001875, 6.21933237642, 344.9468627914],
    [0.0000000244, 2.94584507929, 323.2615991739],
    [0.00000002034, 0.93720484486, 927.5911504839],
    [0.0000000231, 0.13408163378, 99.6675629974],
    [0.00000001764, 0.29031425745, 191.45151239371],
    [0.00000002032, 2.17108818008, 636.95971005981],
    [0.00000001993, 0.70131684029, 1258.21011414209],
    [0.00000001921, 5.87131438069, 2641.0974609887],
    [0.0000000162, 4.33606938312, 1596.43025976811],
    [0.00000001903, 1.58126923147, 2634.47154895491],
    [0.00000001568, 1.46883265025, 235.6343134493],
    [0.00000001835, 2.03918042522, 536.5606946119],
    [0.00000001523, 6.05102540851, 956.04533848709],
    [0.00000002086, 0.0675102949, 445.00125562421],
    [0.00000001666, 3.27204219166, 1876.76675945369],
    [0.00000001479, 1.20460352519, 6290.4332144757],
    [0.00000001479, 0.55429461283, 5849.1202946311],
    [0.00000001439, 1.65531266077, 2538.4923217371],
    [0.00000001464, 5.75084658705, 5863.3473886327],
    [0.00000001464, 2.29123683992, 6276.2061204741],
    [0.00000001676, 0.63508426553, 1251.0965671413],
    [0.00000001945, 5.05629111259, 845.8390172677],
    [0.00000001436, 4.66419938107, 508.5941415757],
    [0.00000001481, 2.92781569338, 284.39235822571],
    [0.00000001709, 1.78635026289, 2318.0796792983],
    [0.00000001305, 2.53739213998, 107.2687449652],
    [0.00000001548, 1.24859563362, 2943.74987161071],
    [0.00000001465, 1.19825645294, 2531.3787747363],
    [0.00000001494, 5.5136568661, 1780.78753223589],
    [0.00000001243, 3.96240186696, 218.2087793675],
    [0.00000001234, 0.91112106896, 208.8770464755],
    [0.00000001359, 0.27102919236, 142.6934676173],
    [0.00000001217, 3.60020530728, 1052.51220067191],
    [0.00000001352, 1.9248018585, 209.87388421679],
    [0.00000001391, 0.65264575339, 1243.98302014049],
    [0.00000001426, 2.11026020785, 852.9525642685],
    [0.00000001501, 3.67811053153, 1691.9218520189],
    [0.00000001326, 4.70937835849, 2751.79141717511],
    [0.00000001171, 6.04141012834, 67.91186905],
    [0.00000001462, 6.22305747248, 160.852714882],
    [0.00000001164, 6.20382255072, 117.0760507367],
    [0.00000001337, 1.54820693649, 2627.3580019541],
    [0.00000001509, 0.21806196966, 1574.6019837987],
    [0.00000001213, 2.7442246286, 1354.6769763269],
    [0.00000001241, 5.97315240097, 1140.8902459219],
    [0.00000001288, 1.29947866802, 2950.8634186115],
    [0.00000001337, 2.21013619697, 2421.1724535169],
    [0.00000001327, 0.27411407224, 1567.48843679789],
    [0.00000001118, 4.60785389063, 209.12312469139],
    [0.00000001043, 2.37818871541, 156.9205616189],
    [0.00000001069, 4.66047916687, 194.89603068979],
    [0.00000001088, 0.96796460237, 1272.9248431107],
    [0.0000000127, 5.73542325903, 2516.66404576769],
    [0.00000001032, 5.01309781815, 1361.3028883607],
    [0.00000001009, 0.15463134354, 52.446380556],
    [0.000000011, 2.45485733183, 1671.06884598351],
    [0.00000001071, 4.31734498299, 1354.18934135989],
    [0.0000000112, 4.50723064884, 1037.7974717033],
    [0.00000001271, 3.02683993003, 721.40560204669],
    [0.00000001009, 4.14782207001, 1670.5812110165],
    [0.00000001145, 0.18866100481, 3157.04896704871],
    [0.00000001072, 4.98720300139, 2435.3995475185],
    [0.00000001044, 0.37186765557, 1560.3748897971],
    [0.00000001195, 4.23012320818, 632.5399218297],
    [0.00000001043, 4.68469356625, 2729.96314120569],
    [0.00000000889, 5.13451420872, 359.173956793],
    [0.00000000881, 4.07324193143, 1148.49142788971],
    [0.0000000104, 5.49603658299, 1773.6739852351],
    [0.00000001118, 6.27960853334, 1890.9938534553],
    [0.00000001047, 0.9726500438, 3260.1417412673],
    [0.00000001087, 5.17936535207, 2001.2001746747],
    [0.00000001087, 2.03777269848, 2001.68780964171],
    [0.00000000974, 2.14268232218, 1987.4607156401],
    [0.00000000869, 0.17251420225, 621.98185653281],
    [0.00000001085, 1.32838349016, 2214.98690507971],
    [0.00000000841, 3.35616685398, 629.0954035336],
    [0.00000000875, 1.07922697964, 2847.77064439291],
    [0.00000001063, 5.95949690738, 2200.2721761111],
    [0.00000000853, 3.67902900562, 288.32451148881],
    [0.00000001056, 0.19418111722, 2332.3067732999],
    [0.00000000888, 0.32179471274, 1155.1173399235],
    [0.00000001045, 0.14482765695, 2.9375762542],
    [0.00000000793, 3.2624561664, 341.01470952831],
    [0.00000000817, 0.67889320689, 1802.12817323829],
    [0.0000000078, 0.38946586865, 1382.64352936309],
    [0.00000000798, 3.07896109863, 2015.42726867629],
    [0.00000000798, 3.07896109863, 2015.9149036433],
    [0.00000000834, 2.33901429584, 1802.6158082053],
    [0.00000000766, 0.30242307365, 1471.50920958009],
    [0.00000000875, 5.85387427791, 2523.7775927685],
    [0.00000000829, 4.4438589314, 1162.23088692429],
    [0.00000000749, 2.07951145157, 1809.72935520611],
    [0.00000000942, 3.40636938944, 2008.3137216755],
    [0.0000000073, 4.06050820225, 138.76131435421],
    [0.00000000734, 0.83381213045, 749.8597900499],
    [0.00000000727, 0.81605653091, 181.2995840071],
    [0.00000000727, 0.93197698209, 245.7862418359],
    [0.00000000986, 4.19789524983, 1795.0146262375],
    [0.00000000914, 1.81845398539, 266.233110961],
    [0.00000000774, 1.85314072632, 2840.1694624251],
    [0.00000000774, 1.85314072632, 2840.6570973921],
    [0.00000000806, 2.87882505331, 1912.8221294247],
    [0.00000000828, 0.03130512468, 100.1551979644],
    [0.000000007, 1.98220269537, 9779.32999085069],
    [0.000000007, 2.62359991037, 10220.6429106953],
    [0.00000000687, 6.00740806604, 102.84895673509],
    [0.00000000801, 5.73752172813, 1457.2821155785],
];

const Y4: &[Term] = &[
    [0.00007957923, 4.81531837805, 220.6564599223],
    [0.00007883034, 3.09554141083, 206.42936592071],
    [0.00001517028, 4.76816117565, 227.77000692311],
    [0.00001235695, 3.82520659584, 433.9555553603],
    [0.00001152216, 3.67316954399, 213.5429129215],
    [0.00000879616, 3.77095350877, 0.2438174835],
    [0.00000709628, 3.24840338462, 199.3158189199],
    [0.00000602013, 5.94750261507, 7.3573644843],
    [0.00000507367, 3.21712935929, 426.8420083595],
    [0.00000386382, 6.01344501364, 14.47091148511],
    [0.00000338827, 2.51520356928, 419.72846135871],
    [0.00000186029, 3.85605990474, 441.06910236111],
    [0.00000220262, 2.50677283832, 640.1411037975],
    [0.0000017321, 2.89158751393, 647.25465079831],
    [0.00000084974, 4.62115933793, 234.8835539239],
    [0.0000008534, 4.39717612141, 213.0552779545],
    [0.00000044264, 6.05982256678, 117.5636857037],
    [0.00000045849, 5.16536949235, 6.86972951729],
    [0.00000047835, 1.64342336148, 853.4401992355],
    [0.00000041104, 2.1840096838, 412.6149143579],
    [0.00000030735, 5.85312406338, 21.5844584859],
    [0.00000022639, 2.96960991387, 654.3681977991],
    [0.00000021067, 3.34244726581, 103.3365917021],
    [0.0000002023, 0.17279084911, 110.45013870291],
    [0.00000021389, 2.53635561163, 205.9417309537],
    [0.00000016854, 4.38021440482, 124.6772327045],
    [0.00000021739, 1.99698913462, 860.55374623631],
    [0.00000017501, 4.23662156145, 220.16882495529],
    [0.00000014506, 4.3989497615, 88.6218627335],
    [0.00000017401, 2.26232682838, 198.82818395289],
    [0.00000013517, 3.33447998001, 309.5221401393],
    [0.00000011814, 5.16076867097, 323.74923414091],
    [0.00000012071, 3.74132731532, 448.1826493619],
    [0.00000011725, 4.75596558897, 330.8627811417],
    [0.00000010174, 4.42772116867, 95.7354097343],
    [0.00000011491, 3.65800261495, 192.2022719191],
    [0.00000010611, 4.0722072096, 302.40859313851],
    [0.00000012147, 2.66285969856, 633.0275567967],
    [0.00000009067, 4.26864930915, 13.9832765181],
    [0.00000008918, 3.0399046036, 426.3543733925],
    [0.00000008311, 3.10463384858, 430.02340209721],
    [0.00000007296, 0.7785415161, 316.6356871401],
    [0.0000000789, 0.94138641674, 1066.7392946735],
    [0.00000006699, 3.06921349305, 109.9625037359],
    [0.00000006339, 3.75710669061, 216.72430665921],
    [0.00000006254, 1.12954162648, 210.36151918381],
    [0.00000006126, 3.2197182401, 301.9209581715],
    [0.00000006725, 3.94118928489, 625.9140097959],
    [0.00000006784, 4.2186591912, 223.83785366],
    [0.00000006868, 0.65717842769, 203.247972183],
    [0.00000006111, 3.59045265634, 96.2230447013],
    [0.00000004468, 3.29229132687, 309.0345051723],
    [0.0000000416, 5.74668718431, 522.8212355773],
    [0.00000003681, 5.6613190891, 423.66061462181],
    [0.00000003615, 5.12190926865, 405.5013673571],
    [0.00000003079, 0.92409053273, 412.12727939089],
    [0.00000003614, 1.94380765622, 515.2200536095],
    [0.00000002896, 6.00160618678, 515.70768857651],
    [0.00000003, 3.15709072507, 422.9098550964],
    [0.00000002685, 3.43239500452, 209.6107596584],
    [0.00000002918, 5.44500673473, 89.10949770051],
    [0.00000002617, 1.40935172097, 217.4750661846],
    [0.00000002884, 2.20199681607, 191.7146369521],
    [0.00000002281, 2.190649798, 316.14805217309],
    [0.00000002717, 3.78847562141, 131.79077970531],
    [0.00000002556, 3.08407888684, 337.9763281425],
    [0.00000001782, 4.5107829637, 241.9971009247],
    [0.00000001782, 0.37884320289, 185.08872491831],
    [0.00000001856, 2.79299417712, 618.3128278281],
    [0.00000001713, 2.96942684848, 625.42637482889],
    [0.00000001632, 0.86290354268, 728.5191490475],
    [0.0000000198, 1.69424503948, 831.6119232661],
    [0.00000001607, 6.10863313121, 611.1992808273],
    [0.00000001801, 4.27647079459, 227.2823719561],
    [0.00000001532, 5.31288615169, 1052.51220067191],
    [0.0000000151, 2.58764647681, 742.74624304909],
    [0.00000001531, 0.19788540477, 529.44714761109],
    [0.00000001394, 3.60010141007, 1361.3028883607],
    [0.00000001427, 2.30374859738, 1251.0965671413],
    [0.00000001649, 4.25957274495, 295.2950461377],
    [0.00000001249, 3.74724649234, 743.23387801611],
    [0.00000001353, 4.07456235845, 1678.1823929843],
    [0.00000001674, 5.46467832773, 231.70216018621],
    [0.00000001646, 5.6881105504, 195.38366565681],
    [0.00000001305, 2.57485726113, 934.70469748469],
    [0.0000000116, 1.35876987453, 81.50831573269],
    [0.00000001537, 1.64895812279, 21.0968235189],
    [0.00000001096, 5.87040605326, 832.0995582331],
    [0.00000001156, 1.65604017773, 508.10650660869],
    [0.00000001062, 3.29348541593, 294.80741117069],
    [0.00000001285, 1.15881412669, 1464.3956625793],
    [0.00000001079, 4.46936132008, 1368.9040703285],
    [0.00000001006, 4.8336507316, 1361.79052332771],
    [0.0000000129, 4.69044132255, 736.1203310153],
    [0.00000001051, 2.68982495323, 941.8182444855],
    [0.00000001027, 3.70327166201, 433.46792039329],
    [0.00000001021, 2.48350861942, 522.3336006103],
    [0.00000001137, 2.90811550586, 1891.4814884223],
    [0.00000000991, 3.78009400759, 1994.5742626409],
    [0.00000001038, 1.35464465726, 1148.00379292269],
    [0.00000000865, 0.40802396366, 750.3474250169],
    [0.00000000859, 5.85730307132, 416.547067621],
    [0.00000000862, 3.18022940336, 437.136949098],
    [0.00000000776, 1.33793489456, 102.84895673509],
    [0.00000000797, 2.04691519292, 1375.52998236229],
    [0.00000000824, 4.53645127236, 639.6534688305],
    [0.00000000881, 3.4573574014, 1258.6977491091],
    [0.00000000686, 1.77528970097, 234.3959189569],
    [0.00000000684, 3.52622623805, 661.4817447999],
    [0.00000000859, 3.63825836835, 537.0483295789],
];

const Y5: &[Term] = &[
    [0.00000605503, 3.02566952553, 220.6564599223],
    [0.00000576439, 4.77676022633, 206.42936592071],
    [0.00000227348, 3.0200548431, 227.77000692311],
    [0.00000133503, 2.01762000448, 433.9555553603],
    [0.00000094765, 4.98454736271, 199.3158189199],
    [0.00000039851, 4.29556357711, 14.47091148511],
    [0.0000003419, 2.07372397023, 441.06910236111],
    [0.00000024941, 3.84014099419, 0.2438174835],
    [0.00000023155, 1.07127433478, 647.25465079831],
    [0.00000016208, 0.82050987845, 426.8420083595],
    [0.00000012333, 0.61142473697, 640.1411037975],
    [0.00000010358, 2.92988275487, 234.8835539239],
    [0.00000010534, 5.12660829509, 419.72846135871],
    [0.00000008668, 1.94893255744, 192.2022719191],
    [0.0000000884, 3.98137124653, 213.5429129215],
    [0.00000004707, 6.14618174587, 88.6218627335],
    [0.00000005904, 3.16028075613, 7.3573644843],
    [0.00000003895, 0.73151574345, 405.5013673571],
    [0.00000003976, 3.54063716264, 6.86972951729],
    [0.00000003675, 2.04382079343, 213.0552779545],
    [0.00000003472, 6.06844015557, 853.4401992355],
    [0.00000004393, 1.18474783269, 654.3681977991],
    [0.0000000329, 2.31998889526, 124.6772327045],
    [0.00000002569, 1.20332477401, 109.9625037359],
    [0.00000002467, 1.58903935784, 515.70768857651],
    [0.00000002708, 0.15976971982, 860.55374623631],
    [0.00000002138, 2.01599255393, 448.1826493619],
    [0.00000002447, 2.47106712193, 220.16882495529],
    [0.00000001979, 5.69757911363, 302.40859313851],
    [0.00000002238, 0.86043138018, 198.82818395289],
    [0.00000001727, 1.65089858299, 301.9209581715],
    [0.00000001398, 0.05843587724, 309.5221401393],
    [0.00000001536, 3.94854505604, 205.9417309537],
    [0.00000001195, 3.93835889247, 117.5636857037],
    [0.00000001, 2.44450069185, 223.83785366],
    [0.00000000984, 2.38499591413, 203.247972183],
    [0.00000000791, 0.61482230222, 330.8627811417],
    [0.00000000979, 0.49750454847, 95.7354097343],
    [0.00000000784, 1.61990559836, 522.8212355773],
    [0.0000000091, 0.48207868964, 96.2230447013],
];

const Z0: &[Term] = &[
    [0.4135695094, 3.60234142982, 213.299095438],
    [0.01148283576, 2.85128367469, 426.598190876],
    [0.01214249867, 0.0, 0.0],
    [0.00329280791, 0.57121407104, 206.1855484372],
    [0.00286934048, 3.48073526693, 220.4126424388],
    [0.00099076584, 4.73369511264, 7.1135470008],
    [0.0005736182, 4.92611225093, 110.2063212194],
    [0.00047738127, 2.10039779728, 639.897286314],
    [0.00043458803, 5.84904978051, 419.4846438752],
    [0.00034565673, 5.4261422959, 316.3918696566],
    [0.00016185391, 2.72987173675, 433.7117378768],
    [0.0000900127, 1.38140102737, 103.0927742186],
    [0.00011433574, 3.71662021072, 529.6909650946],
    [0.00005398708, 5.13204892363, 202.2533951741],
    [0.00003902467, 3.71499738796, 323.5054166574],
    [0.00003709212, 5.05549348785, 632.7837393132],
    [0.000036141, 3.35210451276, 227.5261894396],
    [0.00003379953, 2.13868919206, 11.0457002639],
    [0.00003089874, 3.62572857085, 209.3669421749],
    [0.00002683064, 4.87689555581, 224.3447957019],
    [0.00002963493, 0.46490184985, 217.2312487011],
    [0.00002343367, 1.3455827834, 853.196381752],
    [0.00002423663, 2.9290709476, 63.7358983034],
    [0.00001701916, 1.89892525654, 735.8765135318],
    [0.00001941205, 4.59421314662, 14.2270940016],
    [0.00001990145, 0.73166053611, 199.0720014364],
    [0.00001460265, 3.12851339724, 522.5774180938],
    [0.00001148341, 4.41139213915, 117.3198682202],
    [0.00001092809, 3.10679381209, 216.4804891757],
    [0.00001015179, 1.97897195994, 647.0108333148],
    [0.00001098254, 0.96097709156, 210.1177017003],
    [0.0000099103, 2.99610026682, 846.0828347512],
    [0.00001028743, 2.11933059243, 415.5524906121],
    [0.00000907817, 4.6857627861, 309.2783226558],
    [0.00000818092, 2.91497656196, 149.5631971346],
    [0.00000733443, 2.10018715614, 74.7815985673],
    [0.00000631275, 1.30557255814, 277.0349937414],
    [0.00000574266, 0.63353925382, 490.3340891794],
    [0.00000471645, 1.62329782277, 1052.2683831884],
    [0.00000416292, 5.88171380023, 95.9792272178],
    [0.00000412467, 2.56322277221, 1162.4747044078],
    [0.00000381934, 2.83850532211, 838.9692877504],
    [0.00000370902, 2.22356953874, 351.8165923087],
    [0.00000337338, 4.12487690436, 3.9321532631],
    [0.00000263173, 2.60594324261, 440.8252848776],
    [0.00000245414, 3.87716027424, 1059.3819301892],
    [0.00000231186, 2.79137518143, 127.4717966068],
    [0.00000232835, 1.69429632635, 38.1330356378],
    [0.00000226218, 0.98981012262, 210.8514148832],
    [0.00000252287, 3.04205345262, 137.0330241624],
    [0.00000213656, 3.00046819587, 536.8045120954],
    [0.00000223924, 3.07498346391, 215.7467759928],
    [0.00000189917, 5.75255233102, 742.9900605326],
    [0.00000162873, 3.89762690585, 214.2623032845],
    [0.0000016451, 2.45697452905, 422.6660376129],
    [0.00000158304, 2.31306407231, 1478.8665740644],
    [0.00000156454, 1.35680198123, 1368.660252845],
    [0.00000202699, 3.8558189988, 949.1756089698],
    [0.00000150079, 4.14045329244, 437.6438911399],
    [0.00000142705, 2.58383947868, 1155.361157407],
    [0.00000163551, 0.16578976592, 212.3358875915],
    [0.00000135335, 0.48883402314, 213.3472795478],
    [0.0000012914, 2.17035714121, 76.2660712756],
    [0.00000128206, 0.59415255592, 1066.49547719],
    [0.00000140534, 3.97289861748, 625.6701923124],
    [0.00000121564, 4.51381049808, 3.1813937377],
    [0.0000011919, 1.61391416177, 628.8515860501],
    [0.00000115147, 3.43459040245, 330.6189636582],
    [0.00000135375, 3.57424025701, 213.2509113282],
    [0.00000103727, 6.17639441368, 200.7689224658],
    [0.00000107498, 3.52498564069, 138.5174968707],
    [0.0000010756, 3.9983783647, 85.8272988312],
    [0.00000113808, 0.43922136441, 222.8603229936],
    [0.0000009492, 2.26222536028, 388.4651552382],
    [0.00000110037, 3.51152757685, 1265.5674786264],
    [0.00000101425, 0.14126238472, 430.5303441391],
    [0.00000101928, 0.21047731069, 412.3710968744],
    [0.00000104973, 4.19518394917, 9.5612275556],
    [0.0000008362, 4.82013591775, 1.4844727083],
    [0.00000071104, 4.92741306047, 212.7778305762],
    [0.00000070089, 1.05108025259, 12.5301729722],
    [0.00000066662, 1.22617152895, 860.3099287528],
    [0.00000077048, 0.80511279723, 52.6901980395],
    [0.00000090986, 6.2819848072, 423.4167971383],
    [0.00000062746, 2.06105893244, 1795.258443721],
    [0.00000063467, 2.36959372262, 429.7795846137],
    [0.00000058999, 2.31882650737, 1471.7530270636],
    [0.00000076181, 2.67435759741, 191.2076949102],
    [0.00000063389, 1.81556177589, 350.3321196004],
    [0.00000056601, 1.11303957705, 1685.0521225016],
    [0.00000057837, 3.29043420072, 515.463871093],
    [0.00000070959, 5.41979944279, 213.8203602998],
    [0.0000007015, 3.82574373735, 942.062061969],
    [0.00000051149, 3.8603013169, 173.9422195228],
    [0.00000051666, 3.4911134407, 203.7378678824],
    [0.00000050128, 1.98273693937, 195.1398481733],
    [0.00000048091, 3.20971334548, 234.6397364404],
    [0.00000049761, 6.18808156638, 703.6331846174],
    [0.00000046488, 3.80768518798, 225.8292684102],
    [0.00000054298, 3.18076013146, 1581.959348283],
    [0.00000047483, 1.53655093485, 265.9892934775],
    [0.00000039354, 2.10537295968, 728.762966531],
    [0.00000039602, 2.27507746067, 288.0806940053],
    [0.00000041716, 1.05111221485, 563.6312150384],
    [0.00000037614, 6.14179074602, 217.491881132],
    [0.00000042785, 0.11273484212, 252.6559713532],
    [0.00000037718, 5.96333653993, 210.3783341312],
    [0.00000036792, 1.35292393469, 565.1156877467],
    [0.00000037862, 4.00773869969, 62.2514255951],
    [0.00000036057, 3.30899953753, 212.5483359126],
    [0.0000003546, 5.01105830246, 65.2203710117],
    [0.00000034852, 4.75445504646, 207.8824694666],
    [0.00000040506, 2.20073759144, 362.8622925726],
    [0.0000003256, 6.14806301843, 417.0369633204],
    [0.00000037967, 4.57075294928, 302.164775655],
    [0.00000032818, 5.79538785685, 99.1606209555],
    [0.00000030744, 3.64317302294, 207.6700211455],
    [0.00000032548, 2.95740474962, 70.8494453042],
    [0.0000003583, 0.75230512173, 214.0498549634],
    [0.00000034253, 2.96835157474, 223.5940361765],
    [0.00000032939, 4.45144712576, 21.3406410024],
    [0.00000037689, 4.37977418287, 216.2198567448],
    [0.00000032421, 5.78559756829, 160.6088973985],
    [0.00000028902, 5.81529149124, 88.865680217],
    [0.00000033335, 5.62401622695, 218.7157214094],
    [0.00000038185, 4.19997816879, 209.106309744],
    [0.00000027693, 5.55618950213, 18.1592472647],
    [0.00000028922, 5.58858980738, 425.1137181677],
    [0.0000003233, 4.22794944092, 22.0914005278],
    [0.00000029913, 3.31182307103, 124.433415221],
    [0.00000029455, 5.83042047243, 956.2891559706],
    [0.00000026648, 0.86666603224, 217.964961884],
    [0.00000025659, 5.10869894674, 479.2883889155],
    [0.00000025652, 4.80215156054, 231.4583427027],
    [0.00000026011, 2.05589181933, 1788.1448967202],
    [0.00000025663, 1.81564756635, 2111.6503133776],
    [0.00000022977, 5.44037839738, 142.4496501338],
    [0.00000031283, 3.54881062563, 1258.4539316256],
    [0.00000030192, 0.42929684303, 218.9281697305],
    [0.00000026495, 2.86288115466, 1898.3512179396],
    [0.00000029523, 0.37961341545, 554.0699874828],
    [0.00000022228, 5.48142509504, 408.4389436113],
    [0.00000021237, 0.87139429027, 2001.4439921582],
    [0.00000020174, 1.8538064737, 654.1243803156],
    [0.00000020521, 6.16117414568, 56.6223513026],
    [0.00000023744, 3.20046265011, 208.633228992],
    [0.00000021685, 3.1787148276, 414.0680179038],
    [0.00000019856, 3.1385757274, 175.1660598002],
    [0.00000017347, 5.96946168051, 213.1872208534],
    [0.00000017925, 1.1455634066, 203.0041546995],
    [0.00000018247, 3.00127995342, 831.8557407496],
    [0.00000017378, 0.74127655202, 177.8743727859],
    [0.00000016401, 1.36402971878, 211.8146227297],
    [0.00000016228, 3.17582194781, 98.8999885246],
    [0.00000016107, 0.54971362869, 251.4321310758],
    [0.00000015546, 2.29108586908, 750.1036075334],
    [0.00000014801, 0.2011134119, 148.0787244263],
    [0.0000001532, 3.8029637334, 483.2205421786],
    [0.00000014467, 1.32549449124, 114.1384744825],
    [0.00000014146, 4.85276668809, 327.4375699205],
    [0.00000015436, 1.48161033604, 198.321241911],
    [0.00000014576, 3.75966213667, 213.5115437591],
    [0.0000001482, 3.34957428396, 248.7238180901],
    [0.00000013743, 4.77276011938, 106.2741679563],
    [0.00000017347, 4.37930417897, 213.4109700226],
    [0.00000014576, 0.30591841563, 213.0866471169],
    [0.00000013755, 2.59733474149, 228.276948965],
    [0.00000012945, 1.84552645547, 1045.1548361876],
    [0.00000012834, 4.2459746389, 10.2949407385],
    [0.00000012885, 4.8609570031, 39.3568759152],
    [0.00000016969, 1.27721722241, 214.7835681463],
    [0.00000012706, 0.31024660308, 424.1505103212],
    [0.00000012558, 0.03128357867, 1272.6810256272],
    [0.0000001431, 2.34661407283, 1375.7737998458],
    [0.00000011808, 1.79617614059, 2104.5367663768],
    [0.00000013258, 2.56724178887, 2214.7430875962],
    [0.00000011158, 0.45949551763, 497.4476361802],
    [0.00000014798, 1.03056978581, 2.4476805548],
    [0.00000014861, 3.2634376201, 1574.8458012822],
    [0.00000011978, 6.22486801109, 121.2520214833],
    [0.00000010959, 1.31570222417, 235.3904959658],
    [0.00000011901, 1.58846496072, 635.9651330509],
    [0.0000001108, 5.37041305935, 1169.5882514086],
    [0.00000010475, 2.19368288733, 221.3758502853],
    [0.00000012129, 4.63783219973, 269.9214467406],
    [0.00000010959, 4.40512358221, 213.5597278689],
    [0.00000010673, 1.60141035946, 2428.0421830342],
    [0.00000013041, 1.87126265057, 151.0476698429],
    [0.00000011521, 2.11579255167, 205.2223405907],
    [0.00000010228, 2.41342516828, 275.5505210331],
    [0.00000010229, 0.96548776504, 842.1506814881],
    [0.00000010959, 5.94363969204, 213.0384630071],
    [0.00000009406, 3.39740548756, 650.9429865779],
    [0.00000010284, 0.01930234298, 219.4494345923],
    [0.00000009424, 1.68112701238, 488.8496164711],
    [0.00000008939, 5.28697277625, 340.7708920448],
    [0.00000009017, 2.70864683669, 1692.1656695024],
    [0.00000009979, 3.97256303244, 278.5194664497],
    [0.00000008356, 0.65143790392, 2317.8358618148],
    [0.00000009107, 0.33774330802, 10213.285546211],
    [0.00000008169, 3.23957036879, 427.5613987225],
    [0.00000009044, 0.23054654773, 312.1990839626],
    [0.00000007927, 3.97539997718, 210.5907824523],
    [0.00000010063, 4.2149869212, 618.5566453116],
    [0.00000009335, 5.70779396792, 425.6349830295],
    [0.00000008385, 0.64196694648, 188.9200730498],
    [0.0000000867, 2.7560107905, 491.8185618877],
    [0.000000081, 4.06039030284, 207.1487562837],
    [0.00000009452, 2.59277908129, 429.0458714308],
    [0.00000007738, 1.55361395079, 601.7642506762],
    [0.00000007577, 6.02114380426, 426.6463749858],
    [0.00000009275, 5.16642875471, 8.0767548473],
    [0.00000007638, 2.70476229552, 543.9180590962],
    [0.00000007663, 2.73399784358, 1148.2476104062],
    [0.00000007158, 5.84039229615, 84.3428261229],
    [0.00000008033, 4.20065885029, 767.3690829208],
    [0.00000006822, 6.12047591103, 1279.794572628],
    [0.00000008887, 4.87842237223, 1589.0728952838],
    [0.00000006961, 3.34826318442, 237.6781178262],
    [0.0000000658, 5.81874339759, 284.1485407422],
    [0.00000006629, 1.53732206945, 289.5651667136],
    [0.00000006283, 3.84796221759, 125.9873238985],
    [0.00000007796, 0.08813581424, 216.0074084237],
    [0.00000008282, 1.90022750359, 134.5853436076],
    [0.00000006576, 0.35050721605, 220.4608265486],
    [0.00000006587, 0.58291546593, 213.4591541324],
    [0.00000006378, 6.14309601319, 73.297125859],
    [0.00000006626, 3.37506241952, 312.4597163935],
    [0.00000006587, 3.48062808501, 213.1390367436],
    [0.00000007576, 2.82334902636, 426.5500067662],
    [0.00000005988, 5.47551169354, 35.4247226521],
    [0.00000005723, 5.22938546212, 212.0270710508],
    [0.00000006565, 5.1842352798, 67.6680515665],
    [0.00000005704, 5.3116403771, 1485.9801210652],
    [0.00000006842, 6.15429926594, 179.3588454942],
    [0.00000007349, 0.73079523905, 355.7487455718],
    [0.0000000559, 4.19082216094, 247.2393453818],
    [0.00000006488, 2.29038019982, 2531.1349572528],
    [0.00000007413, 2.98595847215, 1891.2376709388],
    [0.00000005491, 2.70527999156, 2008.557539159],
    [0.0000000582, 2.98199777797, 5.4166259714],
    [0.00000005622, 1.4590188232, 501.3797894433],
    [0.00000005473, 0.81641753389, 181.0557665236],
    [0.00000005454, 6.12211624341, 643.8294395771],
    [0.00000005407, 1.53066536154, 2420.9286360334],
    [0.00000005442, 0.02368001914, 404.5067903482],
    [0.00000005436, 4.67977840196, 621.7380390493],
    [0.00000006267, 5.43877709236, 636.7158925763],
    [0.00000005068, 4.3397890475, 113.3877149571],
    [0.00000004865, 5.10809843245, 69.1525242748],
    [0.0000000507, 3.27536823314, 144.1465711632],
    [0.00000004738, 0.53669462342, 1073.6090241908],
    [0.00000005183, 2.18841260581, 107.0249274817],
    [0.0000000531, 0.66732715963, 116.4260963429],
    [0.00000005141, 2.42998599018, 692.5874843535],
    [0.00000006231, 5.93759865879, 436.1594184316],
    [0.00000006367, 3.45785496152, 220.364458329],
    [0.00000004541, 0.61777794179, 206.233732547],
    [0.00000004528, 1.6575659631, 1361.5467058442],
    [0.00000005172, 4.96799695932, 342.2553647531],
    [0.00000005805, 2.10740836405, 4.665866446],
    [0.00000004639, 1.63821364676, 5.6290742925],
    [0.00000004731, 1.4464198594, 2744.4340526908],
    [0.00000004756, 3.73287086188, 206.1373643274],
    [0.00000004322, 4.15153138812, 426.0769260142],
    [0.00000004167, 1.65241802351, 191.9584544356],
    [0.00000004164, 2.47912208303, 447.9388318784],
    [0.00000005676, 5.11706007934, 214.5711198252],
    [0.00000003966, 0.05086647098, 206.706813299],
    [0.00000004603, 5.52562693778, 78.7137518304],
    [0.00000003802, 0.43628874694, 617.8058857862],
    [0.000000048, 5.54041183899, 344.7030453079],
    [0.00000004743, 0.53760335914, 128.9562693151],
    [0.0000000413, 1.61538042826, 643.0786800517],
    [0.00000004686, 3.97383030786, 934.9485149682],
    [0.00000004043, 2.18819710124, 358.9301393095],
    [0.00000003906, 5.19970623343, 630.3360587584],
    [0.00000003883, 5.39147665291, 320.3240229197],
    [0.00000004913, 1.03288629446, 32.2433289144],
    [0.00000003689, 5.45822055399, 916.9322800554],
    [0.00000004228, 4.2836055894, 4.192785694],
    [0.0000000402, 4.88073386744, 54.1746707478],
    [0.00000004185, 3.32405342181, 245.5424243524],
    [0.00000004583, 1.85097979187, 114.3991069134],
    [0.00000004596, 4.18504944347, 219.891377577],
    [0.00000003552, 5.98005739127, 20.6069278195],
    [0.00000003975, 5.80157206371, 14.977853527],
    [0.00000003475, 2.47178960968, 1464.6394800628],
    [0.00000004395, 0.85418906454, 525.4981794006],
    [0.00000003187, 2.61148353061, 2324.9494088156],
    [0.00000003966, 4.66662911986, 427.1194557378],
    [0.00000003124, 0.10655817305, 14.0146456805],
    [0.00000003104, 0.38849805992, 2634.2277314714],
    [0.00000003508, 2.85265213502, 87.3117715395],
    [0.00000002979, 3.04084830124, 420.9691165835],
    [0.00000003143, 1.71420147928, 0.9632078465],
    [0.00000003169, 1.34499488466, 159.1244246902],
    [0.00000003871, 2.71348462732, 2207.6295405954],
    [0.00000002814, 0.526497138, 778.4147831847],
    [0.0000000289, 1.29415320006, 2737.32050569],
    [0.00000002831, 4.4559576463, 518.6452648307],
    [0.00000002757, 2.0537143135, 214.5229357154],
    [0.00000002757, 2.83591185309, 212.0752551606],
    [0.00000003187, 2.00772012188, 2847.5268269094],
    [0.00000002712, 5.27492060596, 305.3461693927],
    [0.00000002771, 2.54360038772, 319.5732633943],
    [0.0000000263, 5.50124179878, 423.6774295692],
    [0.00000002626, 0.49212317679, 153.4953503977],
    [0.00000002828, 3.04457317761, 211.6021744086],
    [0.0000000265, 2.71849987794, 145.6310438715],
    [0.00000002589, 5.1824823965, 1802.3719907218],
    [0.00000002579, 1.68789924795, 6.1503391543],
    [0.00000003452, 0.69033243447, 776.9303104764],
    [0.00000002527, 3.47384786002, 184.9879197867],
    [0.00000002496, 5.9621838611, 2.9207613068],
    [0.00000003222, 3.60809233593, 1251.3403846248],
    [0.00000002684, 5.48972047825, 391.1734682239],
    [0.0000000237, 1.54660575926, 51.2057253312],
    [0.0000000231, 0.63846192912, 416.3032501375],
    [0.00000002444, 3.87972666346, 182.279606801],
    [0.00000002435, 2.718296979, 627.3671133418],
    [0.00000002236, 1.31003501645, 241.6102710893],
    [0.00000002653, 5.7025527009, 220.9339073006],
    [0.00000002646, 3.30185009916, 696.5196376166],
    [0.00000002211, 4.72699183302, 387.2413149608],
    [0.00000002313, 2.81517281649, 738.7972748386],
    [0.00000002197, 2.6392912992, 436.8931316145],
    [0.00000002348, 1.83689902078, 214.9960164674],
    [0.00000002842, 2.88171478117, 337.732510659],
    [0.00000002195, 1.58125142363, 1677.9385755008],
    [0.00000002609, 1.41922918177, 329.7251917809],
    [0.00000002207, 5.6719760778, 905.8865797915],
    [0.00000002182, 3.15263816837, 439.1283638482],
    [0.0000000206, 5.78919528834, 120.358249606],
    [0.00000002079, 5.0800711448, 7.065362891],
    [0.00000002351, 0.26849523535, 140.001969579],
    [0.0000000277, 4.57559729641, 24.3790223882],
    [0.00000002705, 4.32491993913, 46.470422916],
    [0.00000002052, 1.22649156182, 92.0470739547],
    [0.00000002046, 5.19173373776, 347.8844390456],
    [0.00000002036, 2.88971262431, 980.6681783588],
    [0.00000002481, 1.55318712059, 576.1613880106],
    [0.00000002024, 4.32935289944, 31.019488637],
    [0.00000002006, 2.01138855049, 211.8628068395],
    [0.00000002006, 2.8782376161, 214.7353840365],
    [0.00000002026, 2.42235724251, 2641.3412784722],
    [0.00000001938, 2.4801660291, 487.3651437628],
    [0.00000002065, 1.1608121433, 192.6921676185],
    [0.00000002254, 5.9962317474, 1905.4647649404],
    [0.00000001922, 5.98223148262, 96.8729990951],
    [0.00000002534, 2.6227254968, 421.93232443],
    [0.00000002106, 1.8488384149, 299.1263942692],
    [0.00000002211, 1.86083014117, 221.1634019642],
    [0.00000002083, 6.14443432076, 59.8037450403],
    [0.00000001909, 1.13231253998, 282.4516197128],
    [0.00000001898, 3.53454927143, 219.6618829134],
    [0.00000002007, 4.3516782892, 444.7574381407],
    [0.00000001974, 5.7863707967, 430.79097657],
    [0.00000001937, 4.03561100629, 429.5189521828],
    [0.00000001838, 2.97004270413, 425.8474313506],
    [0.0000000188, 3.59058053053, 3340.6124266998],
    [0.00000001858, 5.83605607376, 280.9671470045],
    [0.00000001768, 4.86059839675, 2118.7638603784],
    [0.00000002128, 3.95375781114, 831.1049812242],
    [0.00000002111, 5.51034879271, 428.0826635843],
    [0.00000002359, 3.95534711749, 2.9689454166],
    [0.00000002084, 4.99656154667, 254.9435932136],
    [0.00000002189, 5.75843317256, 418.5214360287],
    [0.00000002225, 5.22774546552, 638.4128136057],
    [0.00000002362, 0.10821349524, 131.4039498699],
    [0.00000001938, 3.62212314488, 267.4737661858],
    [0.00000002349, 2.45602769901, 2524.021410252],
    [0.00000001752, 0.17721513623, 969.6224780949],
    [0.00000002216, 4.46378373321, 353.301065017],
    [0.00000001697, 3.74680430424, 421.1815649046],
    [0.00000001692, 1.296738217, 2840.4132799086],
    [0.00000001698, 2.09387250037, 292.0128472684],
    [0.00000002118, 2.90133577623, 205.4347889118],
    [0.00000002049, 1.88559014939, 199.2844497575],
    [0.00000001712, 2.97477489664, 273.1028404783],
    [0.00000001828, 2.23147050409, 1781.0313497194],
    [0.00000001933, 3.33016281296, 533.6231183577],
    [0.00000001737, 2.59432238776, 264.5048207692],
    [0.00000001676, 2.73737546375, 3480.3105662226],
    [0.00000001935, 2.01080991907, 7.1617311106],
    [0.00000001602, 4.81017819939, 1382.8873468466],
    [0.00000001894, 4.74702697079, 558.0021407459],
    [0.00000001589, 0.85622467383, 1044.4040766622],
    [0.00000001565, 5.03064453644, 458.8415197904],
    [0.00000001648, 5.00766073214, 2648.454825473],
    [0.00000001562, 4.62304098893, 543.0242872189],
    [0.00000001794, 2.92299868481, 227.3137411185],
    [0.00000001844, 6.25012647811, 432.2272651685],
    [0.00000001821, 5.47892889469, 205.6642835754],
    [0.00000001605, 2.57251520836, 3127.3133312618],
    [0.00000001477, 1.36669731999, 206.9363079626],
    [0.00000001468, 4.67912895132, 339.2864193365],
    [0.00000001481, 0.92457754588, 1994.3304451574],
    [0.00000001547, 0.134193401, 465.9550667912],
    [0.00000001457, 0.52628058703, 427.3489504014],
    [0.00000001902, 1.24600006636, 166.828672522],
    [0.00000001529, 2.85370771355, 209.1544938538],
    [0.00000001494, 3.66845408834, 1182.9215735329],
    [0.00000001588, 1.63988438811, 3163.918696566],
    [0.00000001502, 4.9634845977, 373.9079928365],
    [0.00000001608, 3.59138122093, 233.9060232575],
    [0.0000000146, 1.17818401345, 92.940845832],
    [0.00000001462, 5.05747764334, 33.9402499438],
    [0.0000000149, 2.03601440129, 217.4436970222],
    [0.00000001688, 1.50928274793, 815.0633461142],
    [0.00000001778, 0.24563726151, 6.592282139],
    [0.00000001834, 3.98017256784, 212.4053235607],
    [0.00000001834, 0.90945359875, 214.1928673153],
    [0.00000001451, 3.59438611623, 494.2662424425],
    [0.00000001474, 4.97772142978, 1699.2792165032],
    [0.00000001388, 4.77847833406, 2854.6403739102],
    [0.00000001589, 5.43527416407, 2538.2485042536],
    [0.0000000139, 4.08155384651, 894.8408795276],
    [0.00000001435, 1.51395699369, 867.4234757536],
    [0.00000001404, 4.02343833901, 300.6108669775],
];

const Z1: &[Term] = &[
    [0.0381030832, 5.33520316778, 213.299095438],
    [0.00707598508, PI, 0.0],
    [0.00144960439, 2.301493671, 206.1855484372],
    [0.00089591263, 1.69286730496, 220.4126424388],
    [0.0008898208, 6.09698706089, 426.598190876],
    [0.00018761941, 1.23200112053, 419.4846438752],
    [0.00018103257, 2.90933498453, 7.1135470008],
    [0.00006860076, 0.84862244997, 433.7117378768],
    [0.00008398809, 5.89715948074, 639.897286314],
    [0.00005939993, 0.4239656064, 316.3918696566],
    [0.0000257142, 1.61235344206, 227.5261894396],
    [0.00002030372, 5.1979229268, 110.2063212194],
    [0.00001632449, 2.43938017095, 199.0720014364],
    [0.0000112625, 2.85739547477, 14.2270940016],
    [0.00001025703, 0.77676708535, 632.7837393132],
    [0.00001035641, 2.45710665385, 217.2312487011],
    [0.00000919338, 5.6949038032, 529.6909650946],
    [0.00001025261, 3.40455226241, 103.0927742186],
    [0.00000788013, 2.75643752556, 210.1177017003],
    [0.00000652471, 1.66305264153, 202.2533951741],
    [0.00000678403, 5.28303371104, 853.196381752],
    [0.00000546618, 0.04231005132, 647.0108333148],
    [0.00000616068, 1.25272437511, 216.4804891757],
    [0.00000589338, 1.25138980225, 209.3669421749],
    [0.00000398211, 2.75660806272, 117.3198682202],
    [0.00000342895, 1.80589354512, 224.3447957019],
    [0.00000383087, 4.43945576495, 11.0457002639],
    [0.00000315596, 1.62252525888, 323.5054166574],
    [0.00000215621, 0.81176116742, 440.8252848776],
    [0.00000208871, 1.21651777785, 63.7358983034],
    [0.00000180311, 0.93555501458, 309.2783226558],
    [0.00000172362, 0.22156069668, 735.8765135318],
    [0.00000132928, 1.49015865779, 95.9792272178],
    [0.00000141627, 1.38605092643, 412.3710968744],
    [0.00000114025, 4.13401798874, 415.5524906121],
    [0.00000107829, 4.67440616464, 846.0828347512],
    [0.0000011325, 3.23797737561, 277.0349937414],
    [0.00000096663, 5.13321545536, 522.5774180938],
    [0.00000080905, 5.9720759801, 149.5631971346],
    [0.00000078248, 4.68235800719, 215.7467759928],
    [0.00000073767, 3.76912541093, 74.7815985673],
    [0.00000058294, 4.12074427198, 1162.4747044078],
    [0.00000059154, 0.00909087388, 1052.2683831884],
    [0.00000054, 2.6329271157, 3.1813937377],
    [0.00000053374, 1.48573267831, 234.6397364404],
    [0.00000057043, 1.87312646111, 423.4167971383],
    [0.00000052955, 1.6532327469, 330.6189636582],
    [0.00000050894, 2.68041943186, 742.9900605326],
    [0.00000049329, 4.95750749572, 3.9321532631],
    [0.00000061047, 0.29238361571, 422.6660376129],
    [0.00000053719, 2.46146211746, 490.3340891794],
    [0.00000051705, 4.60792983851, 1066.49547719],
    [0.00000043576, 5.53983423151, 860.3099287528],
    [0.00000038478, 2.42479516896, 430.5303441391],
    [0.00000037913, 5.63475884335, 210.8514148832],
    [0.00000042636, 0.46334621133, 429.7795846137],
    [0.00000038288, 3.94527342286, 351.8165923087],
    [0.00000032052, 2.73490028872, 21.3406410024],
    [0.00000037226, 0.77640416852, 536.8045120954],
    [0.00000034303, 5.53964443183, 949.1756089698],
    [0.00000032486, 1.51592537935, 437.6438911399],
    [0.00000025209, 5.6183246148, 203.7378678824],
    [0.000000326, 1.15985496536, 223.5940361765],
    [0.00000028157, 5.03992835097, 515.463871093],
    [0.00000025365, 1.63357066215, 137.0330241624],
    [0.00000022772, 3.87097220542, 1478.8665740644],
    [0.00000022874, 1.52589628823, 124.433415221],
    [0.00000021781, 1.25479228248, 88.865680217],
    [0.00000021071, 2.91498706203, 203.0041546995],
    [0.00000022077, 6.03637528612, 1368.660252845],
    [0.00000021851, 3.47826348846, 38.1330356378],
    [0.00000022636, 0.42502415739, 127.4717966068],
    [0.00000018793, 0.02824698856, 654.1243803156],
    [0.00000018132, 0.35264011886, 85.8272988312],
    [0.00000019127, 4.85094487248, 838.9692877504],
    [0.00000015811, 0.06549781548, 302.164775655],
    [0.00000014993, 5.63243246457, 214.2623032845],
    [0.00000016073, 5.40920567275, 1265.5674786264],
    [0.00000014177, 2.06003944064, 138.5174968707],
    [0.0000001457, 5.68093007156, 942.062061969],
    [0.0000001246, 2.22381807104, 213.3472795478],
    [0.0000001234, 5.42069314117, 217.964961884],
    [0.00000011994, 3.89295080099, 728.762966531],
    [0.00000015172, 4.88775469732, 208.633228992],
    [0.0000001456, 4.02541618429, 195.1398481733],
    [0.00000012463, 5.30921040178, 213.2509113282],
    [0.00000011186, 1.39522203481, 210.3783341312],
    [0.00000011627, 2.81135897939, 231.4583427027],
    [0.00000015326, 4.31191275758, 628.8515860501],
    [0.00000012272, 2.46356221718, 200.7689224658],
    [0.0000001506, 1.90080442413, 212.3358875915],
    [0.00000011799, 1.46416357606, 218.7157214094],
    [0.0000001079, 0.87460319256, 408.4389436113],
    [0.00000010282, 5.35193913607, 207.6700211455],
    [0.00000013027, 3.77267768832, 350.3321196004],
    [0.00000010032, 2.41897316373, 10.2949407385],
    [0.00000012485, 2.56988226727, 340.7708920448],
    [0.00000011155, 4.46475107308, 52.6901980395],
    [0.00000011678, 5.99973973452, 191.2076949102],
    [0.00000009985, 5.55354944984, 76.2660712756],
    [0.00000009222, 3.47198476691, 18.1592472647],
    [0.00000008684, 3.59341160996, 1795.258443721],
    [0.00000008772, 2.84157598451, 191.9584544356],
    [0.00000008792, 5.77952076653, 1685.0521225016],
    [0.00000010212, 4.67919299694, 1155.361157407],
    [0.00000007416, 2.34743956282, 160.6088973985],
    [0.00000008681, 3.66196489035, 222.8603229936],
    [0.00000008204, 4.0016757899, 388.4651552382],
    [0.00000007229, 0.85694899722, 142.4496501338],
    [0.00000007962, 6.12384852532, 209.106309744],
    [0.00000008152, 0.1785088377, 1.4844727083],
    [0.00000007462, 4.54643529511, 625.6701923124],
    [0.00000008149, 4.75191185936, 831.8557407496],
    [0.00000007464, 5.8775842142, 362.8622925726],
    [0.0000000655, 0.37942895236, 212.7778305762],
    [0.0000000722, 5.2194481242, 1581.959348283],
    [0.00000006436, 0.63886589467, 22.0914005278],
    [0.00000007311, 0.07712493176, 265.9892934775],
    [0.0000000704, 5.39023352132, 1258.4539316256],
    [0.00000006246, 6.10782448635, 618.5566453116],
    [0.0000000554, 1.63194253275, 56.6223513026],
    [0.0000000746, 2.16123164874, 207.8824694666],
    [0.00000006689, 5.61849505042, 483.2205421786],
    [0.00000005366, 2.54918207389, 554.0699874828],
    [0.00000007245, 3.44291004853, 12.5301729722],
    [0.00000005769, 0.85039589871, 225.8292684102],
    [0.0000000653, 0.87136105335, 213.8203602998],
    [0.00000005249, 0.71690429208, 447.9388318784],
    [0.00000004793, 4.97423814367, 212.5483359126],
    [0.00000005801, 0.02624779337, 269.9214467406],
    [0.0000000471, 3.07134751984, 1375.7737998458],
    [0.00000005649, 5.76570118321, 635.9651330509],
    [0.00000004366, 4.43717368507, 235.3904959658],
    [0.00000005595, 1.00573470142, 70.8494453042],
    [0.00000005094, 0.10066001708, 750.1036075334],
    [0.00000004487, 4.79200734443, 218.9281697305],
    [0.0000000422, 3.11074964024, 703.6331846174],
    [0.0000000453, 2.43215667228, 216.2198567448],
    [0.00000004076, 1.21943503644, 417.0369633204],
    [0.00000004075, 5.52140305637, 2001.4439921582],
    [0.00000004489, 5.12835463313, 1574.8458012822],
    [0.00000003835, 4.59484102776, 424.1505103212],
    [0.00000004075, 4.07912904262, 1279.794572628],
    [0.00000004918, 4.36928157904, 1471.7530270636],
    [0.00000003719, 3.42064399733, 1045.1548361876],
    [0.00000004734, 5.61204474661, 9.5612275556],
    [0.00000004537, 0.79869612235, 543.9180590962],
    [0.0000000361, 5.94058751363, 934.9485149682],
    [0.0000000423, 5.90345986772, 173.9422195228],
    [0.00000003444, 2.86327846707, 106.2741679563],
    [0.00000003432, 4.89216582171, 497.4476361802],
    [0.00000003553, 4.80761740206, 1073.6090241908],
    [0.00000004601, 4.77897976995, 288.0806940053],
    [0.00000003314, 3.41625676576, 2111.6503133776],
    [0.00000003264, 4.4552017536, 107.0249274817],
    [0.00000003442, 2.57824148394, 113.3877149571],
    [0.00000003664, 4.49847588517, 1148.2476104062],
    [0.00000003349, 1.27990783834, 344.7030453079],
    [0.00000002971, 4.31371705105, 219.4494345923],
    [0.0000000292, 1.64503980864, 636.7158925763],
    [0.00000002971, 2.61742682364, 404.5067903482],
    [0.00000003051, 5.10422803245, 1898.3512179396],
    [0.00000002774, 3.1410166547, 217.491881132],
    [0.0000000295, 5.37168308363, 175.1660598002],
    [0.00000002822, 1.33413781392, 650.9429865779],
    [0.00000003174, 1.19063213567, 337.732510659],
    [0.00000003041, 6.26099119193, 207.1487562837],
    [0.00000002591, 4.52751512849, 565.1156877467],
    [0.00000003416, 5.97202994093, 643.0786800517],
    [0.00000002507, 0.83753919585, 436.8931316145],
    [0.0000000235, 2.16713733034, 177.8743727859],
    [0.00000002755, 3.61967991567, 114.1384744825],
    [0.00000002495, 4.64668211731, 429.0458714308],
    [0.00000002768, 4.77439427919, 1891.2376709388],
    [0.00000002238, 4.00121267561, 284.1485407422],
    [0.00000002251, 4.90436209991, 2214.7430875962],
    [0.00000002409, 3.56267761888, 1169.5882514086],
    [0.00000002157, 3.02442510484, 1692.1656695024],
    [0.00000002003, 2.47564274875, 416.3032501375],
    [0.00000002085, 4.09277149039, 1272.6810256272],
    [0.00000001945, 0.97841451672, 114.3991069134],
    [0.00000001907, 3.36673783584, 1059.3819301892],
    [0.00000001861, 4.45402970588, 508.3503240922],
    [0.00000001874, 2.73629728926, 214.0498549634],
    [0.00000001905, 2.99492664264, 1361.5467058442],
    [0.00000002064, 5.39674851006, 245.5424243524],
    [0.00000001878, 0.56676085326, 621.7380390493],
    [0.00000002525, 1.19036969669, 479.2883889155],
    [0.00000001966, 2.58393370207, 99.1606209555],
    [0.00000001908, 2.85404393589, 355.7487455718],
    [0.00000002056, 2.39618093351, 2435.155730035],
    [0.00000002158, 4.97710925643, 2317.8358618148],
    [0.00000002202, 0.84567094644, 358.9301393095],
    [0.00000001881, 1.13062277248, 757.2171545342],
    [0.00000001707, 1.57935987501, 6069.7767545534],
    [0.00000002151, 4.06616159617, 1788.1448967202],
    [0.00000001746, 3.0645557577, 2008.557539159],
    [0.00000001746, 5.09056895026, 220.4608265486],
    [0.00000001795, 2.95316519456, 1781.0313497194],
    [0.000000017, 6.05669760153, 206.1373643274],
    [0.00000001614, 5.96461527769, 867.4234757536],
    [0.00000001956, 2.13214810643, 252.6559713532],
    [0.00000001739, 5.77930712282, 181.0557665236],
    [0.00000001553, 1.32350368373, 131.5469622218],
    [0.00000001599, 0.86145918975, 81.7521332162],
    [0.00000001792, 0.86879017108, 4.665866446],
    [0.00000001548, 4.47085375766, 121.2520214833],
    [0.00000001619, 4.79891754382, 842.1506814881],
    [0.00000001513, 3.01415732754, 2428.0421830342],
    [0.00000001822, 2.62978911169, 643.8294395771],
    [0.00000002085, 3.00604517701, 563.6312150384],
    [0.00000001939, 2.25124681713, 1677.9385755008],
    [0.00000001472, 3.39986301851, 956.2891559706],
    [0.00000001467, 4.24274724035, 98.8999885246],
    [0.00000001384, 2.33959628851, 444.7574381407],
    [0.0000000181, 2.02611183018, 2420.9286360334],
    [0.00000001628, 4.47984535594, 251.4321310758],
    [0.00000001593, 1.97508934614, 62.2514255951],
    [0.00000001516, 1.25225067905, 425.1137181677],
    [0.00000001181, 5.09622518839, 414.0680179038],
    [0.00000001211, 0.96174816662, 214.7835681463],
    [0.00000001429, 2.95386700663, 65.2203710117],
    [0.00000001042, 5.99222596459, 151.0476698429],
    [0.000000012, 0.65918491217, 211.8146227297],
    [0.00000000967, 6.01089625149, 1589.0728952838],
    [0.00000000904, 0.07909774752, 213.4109700226],
    [0.00000000904, 1.66925524906, 213.1872208534],
    [0.00000001071, 3.60798747502, 248.7238180901],
    [0.00000000815, 4.93878023673, 2.4476805548],
    [0.00000000775, 3.45264409045, 198.321241911],
    [0.00000000983, 3.20558404998, 312.1990839626],
    [0.0000000076, 2.28889729136, 213.0866471169],
    [0.0000000076, 5.74264101239, 213.5115437591],
    [0.00000000724, 4.57593199965, 228.276948965],
];

const Z2: &[Term] = &[
    [0.00195192259, 0.50946874402, 213.299095438],
    [0.00036491216, 3.99604491617, 206.1855484372],
    [0.00015091412, 6.17687148383, 220.4126424388],
    [0.00019236496, 0.0, 0.0],
    [0.00003420562, 3.04256365132, 419.4846438752],
    [0.00001903731, 1.01852901874, 7.1135470008],
    [0.00001553807, 5.27527652115, 433.7117378768],
    [0.00001658586, 5.05753354015, 426.598190876],
    [0.00000939968, 6.15093957163, 227.5261894396],
    [0.00000665875, 1.95823182523, 316.3918696566],
    [0.00000727405, 3.86689219213, 639.897286314],
    [0.00000708634, 4.14159824503, 199.0720014364],
    [0.00000332785, 1.11013701815, 14.2270940016],
    [0.00000276129, 4.5277220063, 210.1177017003],
    [0.00000246881, 4.50860976295, 103.0927742186],
    [0.00000236419, 1.02568314619, 110.2063212194],
    [0.00000193411, 4.35154385844, 217.2312487011],
    [0.00000170756, 2.72871130039, 632.7837393132],
    [0.00000154811, 4.42812217496, 647.0108333148],
    [0.00000159221, 5.67806982371, 216.4804891757],
    [0.00000100473, 3.17382026227, 853.196381752],
    [0.0000009085, 5.30427538537, 440.8252848776],
    [0.000000776, 3.28475417716, 202.2533951741],
    [0.00000072917, 1.06686891373, 117.3198682202],
    [0.00000061331, 1.61343080245, 529.6909650946],
    [0.00000064246, 3.02694204128, 412.3710968744],
    [0.00000063778, 5.55207588103, 209.3669421749],
    [0.00000041451, 3.33188411884, 309.2783226558],
    [0.00000033437, 0.11560358087, 323.5054166574],
    [0.00000029893, 6.03701243746, 234.6397364404],
    [0.00000025877, 3.50813571651, 95.9792272178],
    [0.00000017574, 0.22180355628, 3.9321532631],
    [0.00000016154, 3.77501334464, 423.4167971383],
    [0.00000015793, 1.02173188447, 21.3406410024],
    [0.00000014438, 5.6052335866, 223.5940361765],
    [0.00000013542, 4.81528922933, 429.7795846137],
    [0.00000015398, 5.52110630605, 224.3447957019],
    [0.00000011511, 4.71374175861, 203.0041546995],
    [0.0000001409, 5.07886462834, 277.0349937414],
    [0.00000014469, 3.60157016903, 860.3099287528],
    [0.0000001212, 0.05423484257, 415.5524906121],
    [0.000000134, 0.51901182147, 522.5774180938],
    [0.00000010074, 4.55389948936, 422.6660376129],
    [0.00000012614, 6.15368985726, 330.6189636582],
    [0.00000010793, 2.51124542537, 1066.49547719],
    [0.0000000899, 6.00345025989, 124.433415221],
    [0.00000010308, 6.00841164198, 11.0457002639],
    [0.00000008308, 0.68581626528, 3.1813937377],
    [0.00000009597, 5.80785895962, 63.7358983034],
    [0.0000000793, 5.51468008833, 735.8765135318],
    [0.00000008053, 3.03363150224, 88.865680217],
    [0.00000008834, 4.47705749563, 654.1243803156],
    [0.00000007356, 4.43315310489, 191.9584544356],
    [0.00000006543, 4.88541538755, 625.6701923124],
    [0.00000008411, 1.49318798287, 742.9900605326],
    [0.00000006909, 4.48978383769, 430.5303441391],
    [0.00000006388, 0.08457977809, 215.7467759928],
    [0.00000007107, 0.70220678131, 949.1756089698],
    [0.00000005669, 0.460490625, 515.463871093],
    [0.00000005034, 5.23865643179, 74.7815985673],
    [0.00000004315, 1.63053592014, 1059.3819301892],
    [0.00000004299, 1.18161521312, 210.8514148832],
    [0.00000003314, 5.42600783265, 437.6438911399],
    [0.00000003489, 0.5317438681, 10.2949407385],
    [0.00000003355, 5.23729212209, 447.9388318784],
    [0.00000003056, 1.18250311873, 942.062061969],
    [0.00000002996, 5.62814654221, 728.762966531],
    [0.00000003361, 5.11461252953, 536.8045120954],
    [0.00000002396, 1.84582366198, 1471.7530270636],
    [0.0000000228, 0.09630660324, 195.1398481733],
    [0.00000002351, 1.27223026559, 231.4583427027],
    [0.00000002515, 0.03375128717, 838.9692877504],
    [0.00000002748, 1.32449995239, 203.7378678824],
    [0.0000000229, 3.07698270979, 408.4389436113],
    [0.0000000204, 5.80760536835, 1162.4747044078],
    [0.00000002084, 0.74674443126, 1265.5674786264],
    [0.00000002283, 1.77539793334, 846.0828347512],
    [0.00000001868, 0.23989474559, 1898.3512179396],
    [0.0000000172, 1.98614962644, 18.1592472647],
    [0.00000001849, 0.68415972849, 1258.4539316256],
    [0.00000001575, 2.31138086283, 302.164775655],
    [0.00000001874, 0.84722174143, 1375.7737998458],
    [0.00000001401, 3.28871251562, 1073.6090241908],
    [0.00000001369, 4.66184064286, 490.3340891794],
    [0.00000001319, 0.58131415395, 618.5566453116],
    [0.0000000143, 2.32626814584, 1368.660252845],
    [0.00000001519, 0.21611173188, 831.8557407496],
    [0.0000000125, 5.97999895371, 351.8165923087],
    [0.00000000966, 2.64913416683, 85.8272988312],
    [0.00000000771, 1.16732337173, 217.964961884],
    [0.00000000697, 0.53637719953, 628.8515860501],
];

const Z3: &[Term] = &[
    [0.00006552316, 1.98918006303, 213.299095438],
    [0.0000620512, 5.69682939522, 206.1855484372],
    [0.00005692884, 0.0, 0.0],
    [0.00001736879, 4.32959476351, 220.4126424388],
    [0.00000450555, 4.83582005306, 419.4846438752],
    [0.00000231881, 4.39490786964, 227.5261894396],
    [0.00000199865, 2.33322152046, 426.598190876],
    [0.00000205985, 5.8474384597, 199.0720014364],
    [0.0000024271, 3.41690207168, 433.7117378768],
    [0.00000139339, 5.28736351227, 7.1135470008],
    [0.00000067206, 5.62860360986, 14.2270940016],
    [0.00000056299, 1.93019307649, 639.897286314],
    [0.0000005578, 0.01778616215, 210.1177017003],
    [0.00000050857, 3.44381337767, 316.3918696566],
    [0.00000029135, 0.23714193891, 103.0927742186],
    [0.00000030392, 2.54675335277, 647.0108333148],
    [0.00000025847, 3.5146471316, 440.8252848776],
    [0.0000002048, 3.7210833765, 216.4804891757],
    [0.00000018853, 6.1097893398, 217.2312487011],
    [0.00000018881, 4.62069633304, 632.7837393132],
    [0.00000017464, 4.72219191592, 412.3710968744],
    [0.00000010821, 1.21499195673, 853.196381752],
    [0.00000010927, 4.30569213091, 234.6397364404],
    [0.00000009297, 5.60250826661, 117.3198682202],
    [0.00000007656, 5.66078016942, 309.2783226558],
    [0.00000007303, 5.47485612817, 202.2533951741],
    [0.00000005, 5.51413752856, 21.3406410024],
    [0.00000004259, 5.49035642189, 95.9792272178],
    [0.00000004838, 0.29619340824, 110.2063212194],
    [0.00000003957, 6.09695713906, 191.9584544356],
    [0.00000003467, 3.7381018185, 223.5940361765],
    [0.00000003322, 1.65077341966, 860.3099287528],
    [0.00000002905, 4.28100382746, 323.5054166574],
    [0.0000000238, 2.83328075768, 429.7795846137],
    [0.00000002398, 4.14927979178, 124.433415221],
    [0.0000000278, 2.64718847967, 654.1243803156],
    [0.00000002787, 0.651015678, 203.0041546995],
    [0.00000001947, 1.53880195116, 209.3669421749],
    [0.00000001856, 5.62026724615, 302.164775655],
    [0.00000001819, 4.80294039631, 88.865680217],
    [0.00000001959, 4.38771818896, 330.6189636582],
    [0.00000001487, 3.12393556594, 529.6909650946],
    [0.00000001276, 3.91936027558, 447.9388318784],
    [0.00000001374, 1.28276260217, 1066.49547719],
    [0.00000000804, 4.10158366806, 224.3447957019],
];

const Z4: &[Term] = &[
    [0.00000789033, 1.11928782644, 206.1855484372],
    [0.00000281365, 3.13274851308, 213.299095438],
    [0.00000169515, PI, 0.0],
    [0.00000157511, 2.4663417152, 220.4126424388],
    [0.00000046995, 1.27259130638, 199.0720014364],
    [0.00000043842, 0.38587829145, 419.4846438752],
    [0.00000043114, 2.62919688921, 227.5261894396],
    [0.00000028988, 1.55482750505, 433.7117378768],
    [0.00000009447, 3.85114048856, 14.2270940016],
    [0.00000006018, 1.29220324867, 426.598190876],
    [0.00000007462, 3.20599530963, 7.1135470008],
    [0.00000004617, 0.67712478942, 647.0108333148],
    [0.00000005282, 1.71952902559, 440.8252848776],
    [0.00000003522, 6.19992669453, 639.897286314],
    [0.00000002258, 0.44292528032, 412.3710968744],
    [0.00000002256, 2.11084590211, 210.1177017003],
    [0.0000000246, 2.50380847653, 234.6397364404],
    [0.00000001239, 5.78004218066, 110.2063212194],
    [0.00000001449, 5.96384491391, 216.4804891757],
    [0.00000001322, 0.54271370335, 853.196381752],
    [0.00000001151, 4.86229315211, 117.3198682202],
    [0.00000001045, 5.61649418233, 316.3918696566],
];

pub static SATURN: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticOfDate,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
